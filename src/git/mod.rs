//! Git operations: cloning over HTTPS with a personal access token.
//!
//! # Example
//!
//! ```rust,no_run
//! use git_code::git::{BasicAuth, Cloner, GitCloner};
//! use git_code::RepositoryRecord;
//! use std::path::Path;
//!
//! let repo = RepositoryRecord {
//!     name: "widgets".into(),
//!     url: "https://github.com/acme/widgets".into(),
//!     clone_ssh: "git@github.com:acme/widgets.git".into(),
//!     clone_http: "https://github.com/acme/widgets.git".into(),
//!     private: true,
//! };
//!
//! let cloner = GitCloner::new(BasicAuth::token("ghp_your_token_here"));
//! cloner.clone_repo(&repo, Path::new("./widgets"))?;
//! # Ok::<(), git_code::error::GitCodeError>(())
//! ```

mod auth;
mod clone;

pub use auth::{BasicAuth, TOKEN_USERNAME};
pub use clone::{Cloner, DEFAULT_SUBMODULE_DEPTH, GitCloner};

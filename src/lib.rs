//! # git-code
//!
//! List and clone the repositories of a GitHub organization using a personal
//! access token.
//!
//! This crate provides:
//! - Paginated listing of an organization's repositories, filtered by a
//!   case-sensitive substring of the name
//! - Resolution of a name fragment to exactly one repository
//! - Cloning over HTTPS with token authentication and submodule recursion
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use git_code::prelude::*;
//!
//! let token = TokenFile::default_location()?.token()?;
//! let client = GitHubClient::new(token.clone());
//!
//! // Print every repository with "spoon" in its name
//! println!("{}", show(&client, "my-org", "spoon")?);
//!
//! // Clone the one repository matching "mute-spoon" into ./global-mute-spoon
//! let cloner = GitCloner::new(BasicAuth::token(token));
//! let options = CloneOptions {
//!     organization: "my-org".into(),
//!     fragment: "mute-spoon".into(),
//!     directory: None,
//! };
//! let cloned = clone(&client, &cloner, &options)?;
//! println!("{}", cloned.directory.display());
//! # Ok::<(), git_code::error::GitCodeError>(())
//! ```

pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod git;
pub mod github;
pub mod host;
pub mod lister;
pub mod repository;
pub mod resolver;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::commands::{CloneOptions, ClonedRepository, clone, show};
    pub use crate::config::Config;
    pub use crate::credentials::{CredentialSource, StaticToken, TokenFile};
    pub use crate::error::{GitCodeError, Result};
    pub use crate::git::{BasicAuth, Cloner, GitCloner};
    pub use crate::github::{GitHubClient, GitHubRepo};
    pub use crate::host::{RateLimit, RepositoryHost};
    pub use crate::lister::list_repositories;
    pub use crate::repository::{RepoPage, RepositoryRecord};
    pub use crate::resolver::resolve;
}

pub use prelude::*;

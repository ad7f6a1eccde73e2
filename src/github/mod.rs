//! GitHub API integration.
//!
//! [`GitHubClient`] implements [`RepositoryHost`](crate::host::RepositoryHost)
//! against the REST API:
//! - `/rate_limit` as the authentication probe
//! - `/orgs/{org}/repos`, following the `Link` header from page to page
//!
//! # Example
//!
//! ```rust,no_run
//! use git_code::prelude::*;
//!
//! let client = GitHubClient::new("ghp_your_token_here");
//! let repos = list_repositories(&client, "my-org", "")?;
//!
//! for repo in repos {
//!     println!("{}: {}", repo.name, repo.clone_http);
//! }
//! # Ok::<(), git_code::error::GitCodeError>(())
//! ```

mod client;
mod repos;

pub use client::GitHubClient;
pub use repos::{GitHubRepo, PER_PAGE};

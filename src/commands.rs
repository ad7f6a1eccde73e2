//! The `show` and `clone` operations.
//!
//! Both take their collaborators explicitly so they can run against stub
//! hosts and cloners.

use crate::error::Result;
use crate::git::Cloner;
use crate::host::RepositoryHost;
use crate::lister::list_repositories;
use crate::repository::RepositoryRecord;
use crate::resolver::resolve;
use std::path::PathBuf;
use tracing::{debug, info};

/// List matching repositories and render them as a pretty-printed JSON array.
pub fn show<H: RepositoryHost + ?Sized>(
    host: &H,
    organization: &str,
    name_filter: &str,
) -> Result<String> {
    let repos = list_repositories(host, organization, name_filter)?;
    info!(count = repos.len(), "repositories matched");
    Ok(serde_json::to_string_pretty(&repos)?)
}

/// Arguments of a single `clone` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneOptions {
    pub organization: String,
    pub fragment: String,
    /// Target directory; `./<name>` when absent.
    pub directory: Option<PathBuf>,
}

/// Outcome of a successful clone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonedRepository {
    pub repo: RepositoryRecord,
    pub directory: PathBuf,
}

/// Resolve the fragment to a single repository and clone it.
pub fn clone<H, C>(host: &H, cloner: &C, options: &CloneOptions) -> Result<ClonedRepository>
where
    H: RepositoryHost + ?Sized,
    C: Cloner + ?Sized,
{
    let candidates = list_repositories(host, &options.organization, &options.fragment)?;
    let repo = resolve(candidates, &options.fragment).inspect_err(|_| {
        debug!(fragment = %options.fragment, "fragment did not resolve to one repository");
    })?;

    let directory = options
        .directory
        .clone()
        .unwrap_or_else(|| repo.default_directory());
    let directory = cloner.clone_repo(&repo, &directory)?;

    Ok(ClonedRepository { repo, directory })
}

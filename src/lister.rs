//! Walks every page of an organization listing.

use crate::error::{GitCodeError, Result};
use crate::host::RepositoryHost;
use crate::repository::RepositoryRecord;
use tracing::debug;

/// List an organization's repositories whose names contain `name_filter`.
///
/// The host's rate limit is checked first; a failure there is reported as an
/// authentication error. Pages are requested one after another until a page
/// has no successor, and records keep upstream order. Any error aborts the
/// whole listing.
pub fn list_repositories<H: RepositoryHost + ?Sized>(
    host: &H,
    organization: &str,
    name_filter: &str,
) -> Result<Vec<RepositoryRecord>> {
    if organization.trim().is_empty() {
        return Err(GitCodeError::InvalidConfig(
            "Organization must not be empty".into(),
        ));
    }

    let limit = host
        .rate_limit()
        .map_err(|e| GitCodeError::Authentication {
            message: e.to_string(),
        })?;
    debug!(
        limit = limit.limit,
        remaining = limit.remaining,
        reset = limit.reset,
        "rate limit"
    );

    let mut all_repos = Vec::new();
    let mut page = 1;

    loop {
        let result = host.list_org_page(organization, page)?;
        debug!(page, count = result.repos.len(), "fetched page");

        all_repos.extend(
            result
                .repos
                .into_iter()
                .filter(|repo| repo.matches(name_filter)),
        );

        match result.next_page {
            None => break,
            Some(next) if next > page => page = next,
            Some(next) => {
                return Err(GitCodeError::GitHub {
                    message: format!("Page {} points back to page {}", page, next),
                });
            }
        }
    }

    Ok(all_repos)
}

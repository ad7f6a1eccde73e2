//! The hosting service seen by the lister.

use crate::error::Result;
use crate::repository::RepoPage;
use serde::Deserialize;

/// Core rate-limit bucket reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RateLimit {
    pub limit: u64,
    pub remaining: u64,
    /// Reset time in epoch seconds.
    pub reset: u64,
}

/// Operations the lister needs from a repository host.
pub trait RepositoryHost {
    /// Query the rate limit for the authenticated token.
    ///
    /// A failure here means authentication failed.
    fn rate_limit(&self) -> Result<RateLimit>;

    /// Fetch one page of an organization's repositories. Pages start at 1.
    fn list_org_page(&self, organization: &str, page: u32) -> Result<RepoPage>;
}

//! GitHub repository listing.

use reqwest::header::{HeaderMap, LINK};
use serde::Deserialize;
use url::Url;

use crate::error::{GitCodeError, Result};
use crate::github::GitHubClient;
use crate::github::client::parse_json;
use crate::host::{RateLimit, RepositoryHost};
use crate::repository::{RepoPage, RepositoryRecord};

/// Page size requested from the listing endpoint.
pub const PER_PAGE: u32 = 100;

/// Repository information from GitHub API.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    #[serde(default)]
    pub html_url: String,
    #[serde(default)]
    pub ssh_url: String,
    #[serde(default)]
    pub clone_url: String,
    #[serde(default)]
    pub private: bool,
}

impl From<GitHubRepo> for RepositoryRecord {
    fn from(repo: GitHubRepo) -> Self {
        Self {
            name: repo.name,
            url: repo.html_url,
            clone_ssh: repo.ssh_url,
            clone_http: repo.clone_url,
            private: repo.private,
        }
    }
}

#[derive(Deserialize)]
struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(Deserialize)]
struct RateLimitResources {
    core: RateLimit,
}

impl RepositoryHost for GitHubClient {
    fn rate_limit(&self) -> Result<RateLimit> {
        let response: RateLimitResponse = self.get("/rate_limit")?;
        Ok(response.resources.core)
    }

    fn list_org_page(&self, organization: &str, page: u32) -> Result<RepoPage> {
        let endpoint = format!(
            "/orgs/{}/repos?per_page={}&page={}",
            urlencoding::encode(organization),
            PER_PAGE,
            page
        );
        let response = self.send(&endpoint)?;
        let next_page = next_page(response.headers())?;
        let repos: Vec<GitHubRepo> = parse_json(response)?;

        Ok(RepoPage {
            repos: repos.into_iter().map(RepositoryRecord::from).collect(),
            next_page,
        })
    }
}

/// Extract the `page` number of the `rel="next"` entry of a `Link` header.
pub(crate) fn next_page(headers: &HeaderMap) -> Result<Option<u32>> {
    let Some(value) = headers.get(LINK) else {
        return Ok(None);
    };
    let value = value.to_str().map_err(|_| GitCodeError::GitHub {
        message: "Link header is not valid UTF-8".into(),
    })?;
    parse_next_link(value)
}

pub(crate) fn parse_next_link(header: &str) -> Result<Option<u32>> {
    for entry in header.split(',') {
        let mut parts = entry.split(';');
        let Some(target) = parts.next() else {
            continue;
        };
        let is_next = parts.any(|param| {
            let param = param.trim();
            param == "rel=\"next\"" || param == "rel=next"
        });
        if !is_next {
            continue;
        }

        let target = target.trim().trim_start_matches('<').trim_end_matches('>');
        let url = Url::parse(target).map_err(|e| GitCodeError::GitHub {
            message: format!("Invalid next page link {}: {}", target, e),
        })?;
        let page = url
            .query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse::<u32>().ok())
            .ok_or_else(|| GitCodeError::GitHub {
                message: format!("Next page link has no page number: {}", target),
            })?;
        return Ok(Some(page));
    }
    Ok(None)
}

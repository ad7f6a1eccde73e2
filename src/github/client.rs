//! GitHub API client.

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, USER_AGENT};

use crate::config::DEFAULT_API_URL;
use crate::error::{GitCodeError, Result};

/// Client for interacting with the GitHub API.
#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) token: String,
    pub(crate) base_url: String,
    pub(crate) client: Client,
}

impl std::fmt::Debug for GitHubClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl GitHubClient {
    /// Create a new GitHub client with the given token.
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_API_URL)
    }

    /// Create a client for GitHub Enterprise with a custom base URL.
    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let mut url = base_url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self {
            token: token.into(),
            base_url: url,
            client: Client::new(),
        }
    }

    /// Get the default headers for API requests.
    pub(crate) fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let auth = HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|_| {
            GitCodeError::InvalidConfig("Access token contains invalid characters".into())
        })?;
        headers.insert(AUTHORIZATION, auth);
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(USER_AGENT, HeaderValue::from_static("git-code"));
        headers.insert(
            "X-GitHub-Api-Version",
            HeaderValue::from_static("2022-11-28"),
        );
        Ok(headers)
    }

    /// Send a GET request, failing on any non-success status.
    pub(crate) fn send(&self, endpoint: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(%url, "GET");
        let response = self.client.get(&url).headers(self.headers()?).send()?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().unwrap_or_default();
            return Err(GitCodeError::GitHub {
                message: format!("API request failed ({}): {}", status, body),
            });
        }

        Ok(response)
    }

    /// Make a GET request to the GitHub API.
    pub(crate) fn get<T: serde::de::DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        let response = self.send(endpoint)?;
        parse_json(response)
    }

    /// Get the token for use in clone credentials.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T> {
    response.json().map_err(|e| GitCodeError::GitHub {
        message: format!("Failed to parse response: {}", e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash() {
        let client = GitHubClient::with_base_url("t", "https://ghe.example.com/api/v3//");
        assert_eq!(client.base_url(), "https://ghe.example.com/api/v3");
    }

    #[test]
    fn test_default_base_url() {
        let client = GitHubClient::new("t");
        assert_eq!(client.base_url(), "https://api.github.com");
        assert_eq!(client.token(), "t");
    }

    #[test]
    fn test_headers() {
        let headers = GitHubClient::new("abc").headers().unwrap();
        assert_eq!(headers[AUTHORIZATION], "Bearer abc");
        assert_eq!(headers[USER_AGENT], "git-code");
    }

    #[test]
    fn test_invalid_token_rejected() {
        let result = GitHubClient::new("bad\ntoken").headers();
        assert!(matches!(result, Err(GitCodeError::InvalidConfig(_))));
    }

    #[test]
    fn test_debug_hides_token() {
        let rendered = format!("{:?}", GitHubClient::new("ghp_secret"));
        assert!(!rendered.contains("ghp_secret"));
    }
}

//! Configuration loaded from `~/.git-code.yaml`.

use crate::error::{GitCodeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the configuration file in the home directory.
pub const CONFIG_FILE_NAME: &str = ".git-code.yaml";

/// Default GitHub API base URL.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Settings for a single command invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Organization whose repositories are listed.
    pub organization: String,
    /// API base URL, for GitHub Enterprise installs.
    pub api_url: Option<String>,
    /// Override for the token file location.
    pub token_file: Option<PathBuf>,
}

impl Config {
    /// Location of the configuration file in the user's home directory.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or_else(|| {
            GitCodeError::InvalidConfig("Could not determine home directory".into())
        })?;
        Ok(home.join(CONFIG_FILE_NAME))
    }

    /// Load config from a YAML file.
    pub fn from_yaml(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            GitCodeError::Io(std::io::Error::new(
                e.kind(),
                format!("Failed to read config file {}: {}", path.display(), e),
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(&content).map_err(|e| {
            GitCodeError::InvalidConfig(format!("Failed to parse YAML config: {}", e))
        })
    }

    /// Load config from an explicit path, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the
    /// default settings.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_yaml(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(_) => return Ok(Self::default()),
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_yaml(&path)
    }

    /// Override the organization when one is given.
    pub fn with_organization(mut self, organization: Option<String>) -> Self {
        if let Some(org) = organization {
            self.organization = org;
        }
        self
    }

    /// The configured organization, rejecting an empty value.
    pub fn require_organization(&self) -> Result<&str> {
        let org = self.organization.trim();
        if org.is_empty() {
            return Err(GitCodeError::InvalidConfig(
                "No organization configured; set `organization` in ~/.git-code.yaml or pass --organization".into(),
            ));
        }
        Ok(org)
    }

    /// API base URL without a trailing slash.
    pub fn api_url(&self) -> &str {
        self.api_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .unwrap_or(DEFAULT_API_URL)
    }
}

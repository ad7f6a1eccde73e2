//! The repository record shown by `show` and resolved by `clone`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The subset of upstream repository metadata this tool retains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryRecord {
    pub name: String,
    /// Canonical web URL.
    pub url: String,
    #[serde(rename = "cloneSsh")]
    pub clone_ssh: String,
    #[serde(rename = "cloneHttp")]
    pub clone_http: String,
    pub private: bool,
}

impl RepositoryRecord {
    /// Case-sensitive substring test; an empty filter matches everything.
    pub fn matches(&self, name_filter: &str) -> bool {
        name_filter.is_empty() || self.name.contains(name_filter)
    }

    /// Clone target used when no directory is given: `./<name>`.
    pub fn default_directory(&self) -> PathBuf {
        PathBuf::from(format!("./{}", self.name))
    }
}

/// One page of an organization listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepoPage {
    pub repos: Vec<RepositoryRecord>,
    /// Page number to request next, `None` on the last page.
    pub next_page: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            url: format!("https://github.com/acme/{}", name),
            clone_ssh: format!("git@github.com:acme/{}.git", name),
            clone_http: format!("https://github.com/acme/{}.git", name),
            private: true,
        }
    }

    #[test]
    fn test_empty_filter_matches_all() {
        assert!(record("anything").matches(""));
    }

    #[test]
    fn test_filter_is_case_sensitive_substring() {
        let repo = record("global-mute-spoon");
        assert!(repo.matches("mute"));
        assert!(repo.matches("global-mute-spoon"));
        assert!(!repo.matches("Mute"));
        assert!(!repo.matches("fork"));
    }

    #[test]
    fn test_default_directory() {
        assert_eq!(
            record("acme-widgets").default_directory(),
            PathBuf::from("./acme-widgets")
        );
    }

    #[test]
    fn test_json_keys() {
        let json = serde_json::to_value(record("api")).unwrap();
        let object = json.as_object().unwrap();
        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort();
        assert_eq!(keys, ["cloneHttp", "cloneSsh", "name", "private", "url"]);
        assert_eq!(object["private"], serde_json::Value::Bool(true));
    }
}

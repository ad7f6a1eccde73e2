//! Picks the single repository a name fragment refers to.

use crate::error::{GitCodeError, Result};
use crate::repository::RepositoryRecord;

/// Resolve `candidates` to exactly one record.
///
/// No candidates is a [`GitCodeError::NoMatch`]; more than one is a
/// [`GitCodeError::Ambiguous`] carrying every candidate name in order.
pub fn resolve(mut candidates: Vec<RepositoryRecord>, fragment: &str) -> Result<RepositoryRecord> {
    match candidates.len() {
        0 => Err(GitCodeError::NoMatch {
            fragment: fragment.to_string(),
        }),
        1 => Ok(candidates.remove(0)),
        _ => Err(GitCodeError::Ambiguous {
            fragment: fragment.to_string(),
            names: candidates.into_iter().map(|r| r.name).collect(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str) -> RepositoryRecord {
        RepositoryRecord {
            name: name.to_string(),
            url: String::new(),
            clone_ssh: String::new(),
            clone_http: format!("https://github.com/acme/{}.git", name),
            private: false,
        }
    }

    #[test]
    fn test_single_candidate() {
        let repo = resolve(vec![record("global-mute-spoon")], "mute-spoon").unwrap();
        assert_eq!(repo.name, "global-mute-spoon");
    }

    #[test]
    fn test_multiple_candidates_report_all_names() {
        let result = resolve(
            vec![record("miro-windows-spoon"), record("global-mute-spoon")],
            "spoon",
        );
        match result {
            Err(GitCodeError::Ambiguous { fragment, names }) => {
                assert_eq!(fragment, "spoon");
                assert_eq!(names, ["miro-windows-spoon", "global-mute-spoon"]);
            }
            other => panic!("expected Ambiguous, got {:?}", other),
        }
    }

    #[test]
    fn test_no_candidates() {
        match resolve(Vec::new(), "nothing") {
            Err(GitCodeError::NoMatch { fragment }) => assert_eq!(fragment, "nothing"),
            other => panic!("expected NoMatch, got {:?}", other),
        }
    }
}

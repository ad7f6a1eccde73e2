//! Error types for git-code.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for listing and cloning operations.
#[derive(Error, Debug)]
pub enum GitCodeError {
    #[error("Must specify a repository name as an argument.")]
    MissingArgument,

    #[error("Token file not found at {}.", .path.display())]
    TokenNotFound { path: PathBuf },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Problem in getting rate limit information: {message}")]
    Authentication { message: String },

    #[error("GitHub API error: {message}")]
    GitHub { message: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Multiple Repository match for '{fragment}', please be more specific:{}", format_names(.names))]
    Ambiguous { fragment: String, names: Vec<String> },

    #[error("No repository matched '{fragment}'")]
    NoMatch { fragment: String },

    #[error("Failed to clone {repo}: {message}")]
    CloneError { repo: String, message: String },

    #[error("Git error: {0}")]
    Git(#[from] git2::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GitCodeError {
    /// Process exit status for this error.
    ///
    /// Every detected failure maps to 1; callers do not distinguish kinds.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

fn format_names(names: &[String]) -> String {
    names.iter().map(|n| format!("\n\t{}", n)).collect()
}

/// A specialized Result type for git-code operations.
pub type Result<T> = std::result::Result<T, GitCodeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_lists_every_name() {
        let err = GitCodeError::Ambiguous {
            fragment: "spoon".into(),
            names: vec!["miro-windows-spoon".into(), "global-mute-spoon".into()],
        };
        let message = err.to_string();
        assert!(message.starts_with("Multiple Repository match"));
        assert!(message.contains("\n\tmiro-windows-spoon"));
        assert!(message.contains("\n\tglobal-mute-spoon"));
    }

    #[test]
    fn test_token_not_found_names_path() {
        let err = GitCodeError::TokenNotFound {
            path: PathBuf::from("/home/someone/.gittoken"),
        };
        assert_eq!(
            err.to_string(),
            "Token file not found at /home/someone/.gittoken."
        );
    }

    #[test]
    fn test_every_error_exits_with_one() {
        let errors = [
            GitCodeError::MissingArgument,
            GitCodeError::NoMatch {
                fragment: "x".into(),
            },
            GitCodeError::Authentication {
                message: "401".into(),
            },
            GitCodeError::CloneError {
                repo: "r".into(),
                message: "m".into(),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1);
        }
    }
}

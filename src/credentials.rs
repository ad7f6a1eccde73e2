//! Access token loading.

use crate::error::{GitCodeError, Result};
use std::path::{Path, PathBuf};

/// File name of the token file in the home directory.
pub const TOKEN_FILE_NAME: &str = ".gittoken";

/// Source of the personal access token.
pub trait CredentialSource {
    /// Return a non-empty, whitespace-trimmed token.
    fn token(&self) -> Result<String>;
}

/// Token stored in a plain-text file.
#[derive(Debug, Clone)]
pub struct TokenFile {
    path: PathBuf,
}

impl TokenFile {
    /// Token file at a specific path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Token file at `~/.gittoken`.
    pub fn default_location() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            GitCodeError::InvalidConfig("Could not determine home directory".into())
        })?;
        Ok(Self::new(home.join(TOKEN_FILE_NAME)))
    }

    /// Use `path` when given, otherwise the default location.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Ok(Self::new(p)),
            None => Self::default_location(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CredentialSource for TokenFile {
    fn token(&self) -> Result<String> {
        // A missing file and an empty file both mean "no token".
        let data = std::fs::read_to_string(&self.path).unwrap_or_default();
        let token = data.trim();
        if token.is_empty() {
            return Err(GitCodeError::TokenNotFound {
                path: self.path.clone(),
            });
        }
        tracing::debug!(path = %self.path.display(), "loaded access token");
        Ok(token.to_string())
    }
}

/// A token held in memory.
#[derive(Debug, Clone)]
pub struct StaticToken(pub String);

impl CredentialSource for StaticToken {
    fn token(&self) -> Result<String> {
        let token = self.0.trim();
        if token.is_empty() {
            return Err(GitCodeError::TokenNotFound {
                path: PathBuf::new(),
            });
        }
        Ok(token.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_token_is_trimmed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOKEN_FILE_NAME);
        std::fs::write(&path, "  ghp_abc123\n\n").unwrap();

        let token = TokenFile::new(&path).token().unwrap();
        assert_eq!(token, "ghp_abc123");
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOKEN_FILE_NAME);

        match TokenFile::new(&path).token() {
            Err(GitCodeError::TokenNotFound { path: reported }) => assert_eq!(reported, path),
            other => panic!("expected TokenNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(TOKEN_FILE_NAME);
        std::fs::write(&path, " \n\t ").unwrap();

        let result = TokenFile::new(&path).token();
        assert!(matches!(result, Err(GitCodeError::TokenNotFound { .. })));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let file = TokenFile::resolve(Some(Path::new("/tmp/custom-token"))).unwrap();
        assert_eq!(file.path(), Path::new("/tmp/custom-token"));
    }

    #[test]
    fn test_static_token() {
        assert_eq!(StaticToken(" t ".into()).token().unwrap(), "t");
        assert!(StaticToken(String::new()).token().is_err());
    }
}

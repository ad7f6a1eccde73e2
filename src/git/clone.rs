//! Repository cloning with git2.

use crate::error::{GitCodeError, Result};
use crate::git::BasicAuth;
use crate::repository::RepositoryRecord;
use git2::build::RepoBuilder;
use git2::{Repository, SubmoduleUpdateOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Submodule recursion depth used for every clone.
pub const DEFAULT_SUBMODULE_DEPTH: usize = 10;

/// Clones a resolved repository into a directory.
pub trait Cloner {
    /// Clone `repo` into `directory`, returning the path of the new checkout.
    ///
    /// An existing, non-empty `directory` makes the clone fail.
    fn clone_repo(&self, repo: &RepositoryRecord, directory: &Path) -> Result<PathBuf>;
}

/// Cloner backed by git2, cloning over HTTPS with token basic auth.
#[derive(Debug, Clone)]
pub struct GitCloner {
    auth: BasicAuth,
    submodule_depth: usize,
    show_progress: bool,
}

impl GitCloner {
    pub fn new(auth: BasicAuth) -> Self {
        Self {
            auth,
            submodule_depth: DEFAULT_SUBMODULE_DEPTH,
            show_progress: true,
        }
    }

    /// Disable progress output on stdout.
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    /// Limit how deep nested submodules are initialized. Zero skips them.
    pub fn submodule_depth(mut self, depth: usize) -> Self {
        self.submodule_depth = depth;
        self
    }

    fn update_submodules(&self, repo: &Repository, depth: usize) -> std::result::Result<(), git2::Error> {
        if depth == 0 {
            return Ok(());
        }

        for mut submodule in repo.submodules()? {
            debug!(
                name = submodule.name().unwrap_or_default(),
                depth, "updating submodule"
            );
            let mut options = SubmoduleUpdateOptions::new();
            options.fetch(self.auth.fetch_options(self.show_progress));
            submodule.update(true, Some(&mut options))?;

            let child = submodule.open()?;
            self.update_submodules(&child, depth - 1)?;
        }
        Ok(())
    }
}

impl Cloner for GitCloner {
    fn clone_repo(&self, repo: &RepositoryRecord, directory: &Path) -> Result<PathBuf> {
        if self.show_progress {
            println!("Cloning into {}", directory.display());
        }
        info!(repo = %repo.name, directory = %directory.display(), "cloning");

        let clone_error = |e: git2::Error| GitCodeError::CloneError {
            repo: repo.name.clone(),
            message: e.message().to_string(),
        };

        let mut builder = RepoBuilder::new();
        builder.fetch_options(self.auth.fetch_options(self.show_progress));
        let cloned = builder
            .clone(&repo.clone_http, directory)
            .map_err(clone_error)?;

        if self.show_progress {
            println!();
        }

        self.update_submodules(&cloned, self.submodule_depth)
            .map_err(clone_error)?;

        Ok(directory.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cloner = GitCloner::new(BasicAuth::token("t"));
        assert_eq!(cloner.submodule_depth, DEFAULT_SUBMODULE_DEPTH);
        assert!(cloner.show_progress);

        let cloner = cloner.quiet().submodule_depth(0);
        assert_eq!(cloner.submodule_depth, 0);
        assert!(!cloner.show_progress);
    }
}

//! Git authentication for HTTPS clones.

use git2::{Cred, FetchOptions, RemoteCallbacks};
use std::io::Write;

/// Username sent with token basic auth. GitHub ignores it, but it must not be empty.
pub const TOKEN_USERNAME: &str = "gittoken";

/// Basic auth using a personal access token as the password.
#[derive(Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for BasicAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicAuth")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl BasicAuth {
    /// Token auth with the conventional placeholder username.
    pub fn token(token: impl Into<String>) -> Self {
        Self {
            username: TOKEN_USERNAME.into(),
            password: token.into(),
        }
    }

    /// Fetch options carrying these credentials and, optionally, progress output.
    pub(crate) fn fetch_options(&self, show_progress: bool) -> FetchOptions<'static> {
        let mut callbacks = RemoteCallbacks::new();
        let auth = self.clone();

        callbacks.credentials(move |_url, _username_from_url, _allowed_types| {
            Cred::userpass_plaintext(&auth.username, &auth.password)
        });

        if show_progress {
            callbacks.transfer_progress(|stats| {
                let mut out = std::io::stdout();
                let _ = write!(
                    out,
                    "\r{}",
                    progress_line(
                        stats.received_objects(),
                        stats.total_objects(),
                        stats.received_bytes(),
                        stats.indexed_deltas(),
                        stats.total_deltas(),
                    )
                );
                let _ = out.flush();
                true
            });
        }

        let mut options = FetchOptions::new();
        options.remote_callbacks(callbacks);
        options
    }
}

/// Progress text for a transfer; the final `N/N` count is shown once all
/// objects arrive, followed by delta resolution when there are deltas.
pub(crate) fn progress_line(
    received_objects: usize,
    total_objects: usize,
    received_bytes: usize,
    indexed_deltas: usize,
    total_deltas: usize,
) -> String {
    if received_objects >= total_objects && total_deltas > 0 {
        format!("Resolving deltas: {}/{}", indexed_deltas, total_deltas)
    } else {
        format!(
            "Receiving objects: {}/{} ({} bytes)",
            received_objects, total_objects, received_bytes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_auth_username() {
        let auth = BasicAuth::token("ghp_abc");
        assert_eq!(auth.username, "gittoken");
        assert_eq!(auth.password, "ghp_abc");
    }

    #[test]
    fn test_progress_shows_completed_count_without_deltas() {
        assert_eq!(
            progress_line(3, 3, 512, 0, 0),
            "Receiving objects: 3/3 (512 bytes)"
        );
    }

    #[test]
    fn test_progress_while_receiving() {
        assert_eq!(
            progress_line(1, 3, 100, 0, 2),
            "Receiving objects: 1/3 (100 bytes)"
        );
    }

    #[test]
    fn test_progress_resolving_deltas() {
        assert_eq!(progress_line(3, 3, 512, 1, 2), "Resolving deltas: 1/2");
    }

    #[test]
    fn test_debug_hides_password() {
        let rendered = format!("{:?}", BasicAuth::token("ghp_secret"));
        assert!(rendered.contains("gittoken"));
        assert!(!rendered.contains("ghp_secret"));
    }
}

//! Token persistence surface.
//!
//! DESIGN
//! ======
//! One key, one plain-string token, no expiry metadata kept client-side.
//! Writes are best-effort: the browser-storage analog this models cannot
//! surface failures mid-interaction, so a failed write logs a warning and
//! the session carries on with its in-memory state.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

/// Origin-scoped storage for the one `access_token` value.
///
/// Read by the request authenticator on every outgoing call; written only
/// by the session on login and cleared on logout (or token purge).
pub trait TokenStore: Send + Sync {
    /// The stored token, if any.
    fn get(&self) -> Option<String>;
    /// Persist a token, replacing any previous one. Best-effort.
    fn set(&self, token: &str);
    /// Remove the stored token. Idempotent, best-effort.
    fn clear(&self);
}

/// In-process store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    token: Mutex<Option<String>>,
}

impl MemoryTokenStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.lock().map_or(None, |guard| guard.clone())
    }

    fn set(&self, token: &str) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = Some(token.to_owned());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.token.lock() {
            *guard = None;
        }
    }
}

/// File-backed store: the token as the entire file contents.
///
/// Persists sessions across process restarts the way the browser app
/// persists them across reloads.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Option<String> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    None
                } else {
                    Some(token.to_owned())
                }
            }
            Err(error) => {
                if error.kind() != ErrorKind::NotFound {
                    tracing::warn!(path = %self.path.display(), %error, "token read failed");
                }
                None
            }
        }
    }

    fn set(&self, token: &str) {
        if let Err(error) = std::fs::write(&self.path, token) {
            tracing::warn!(path = %self.path.display(), %error, "token write failed");
        }
    }

    fn clear(&self) {
        if let Err(error) = std::fs::remove_file(&self.path) {
            if error.kind() != ErrorKind::NotFound {
                tracing::warn!(path = %self.path.display(), %error, "token clear failed");
            }
        }
    }
}

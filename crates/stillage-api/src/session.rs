// ── Session state ──
//
// The bearer token is the only process-wide mutable state: written at
// login and logout, cleared on any 401, read by every outgoing request.
// Modeled as an explicit store handed to the client constructor rather
// than an ambient global.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use secrecy::{ExposeSecret, SecretString};

/// Shared holder for the current bearer token.
///
/// Cheap to clone (`Arc` inside); all clones observe the same token.
/// Requests only read it; [`set`](Self::set) and [`clear`](Self::clear)
/// are the explicit login/logout mutators.
#[derive(Clone, Default)]
pub struct SessionStore {
    token: Arc<ArcSwapOption<SecretString>>,
}

impl SessionStore {
    /// An empty store (anonymous session).
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-loaded with a persisted token.
    pub fn with_token(token: SecretString) -> Self {
        let store = Self::new();
        store.set(token);
        store
    }

    /// Install a new bearer token (login).
    pub fn set(&self, token: SecretString) {
        self.token.store(Some(Arc::new(token)));
    }

    /// Drop the token (logout, or a 401 from the server).
    pub fn clear(&self) {
        self.token.store(None);
    }

    /// Whether a token is currently held.
    pub fn is_authenticated(&self) -> bool {
        self.token.load().is_some()
    }

    /// Expose the current token value for header construction.
    pub(crate) fn bearer(&self) -> Option<String> {
        self.token
            .load()
            .as_ref()
            .map(|t| t.expose_secret().to_owned())
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_anonymous() {
        let store = SessionStore::new();
        assert!(!store.is_authenticated());
        assert!(store.bearer().is_none());
    }

    #[test]
    fn set_and_clear() {
        let store = SessionStore::new();
        store.set(SecretString::from("tok-123"));
        assert!(store.is_authenticated());
        assert_eq!(store.bearer().as_deref(), Some("tok-123"));

        store.clear();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn clones_share_state() {
        let store = SessionStore::new();
        let other = store.clone();
        store.set(SecretString::from("tok-456"));
        assert!(other.is_authenticated());
        other.clear();
        assert!(!store.is_authenticated());
    }
}

use anyhow::Result;
use kharcha_client::Identity;

use crate::session_store::{SessionRecord, SessionStore};

/// Whether a session is established. `Authenticated` holds exactly when both
/// an identity and a token are known; a partial pair never does.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionState {
    Anonymous,
    Authenticated { identity: Identity, token: String },
}

/// Owns the anonymous/authenticated transitions and the persisted session.
///
/// Constructed once at startup and handed to whatever needs it; only
/// `bootstrap`, `login` and `logout` mutate the state. It performs no
/// network I/O — the authentication exchange happens in the API client
/// before `login` is called.
pub struct AuthSession {
    store: SessionStore,
    state: SessionState,
}

impl AuthSession {
    /// Rehydrate from the store. A record missing either field degrades to
    /// anonymous and is cleared, so no partial session survives a restart.
    pub fn bootstrap(store: SessionStore) -> Self {
        let state = match store.load() {
            Some(SessionRecord {
                identity: Some(identity),
                token: Some(token),
            }) => SessionState::Authenticated { identity, token },
            Some(_) => {
                let _ = store.clear();
                SessionState::Anonymous
            }
            None => SessionState::Anonymous,
        };
        Self { store, state }
    }

    /// Record a successful authentication exchange: persist both fields,
    /// then enter `Authenticated`. Calling while already authenticated
    /// overwrites — last write wins. A persistence failure is returned but
    /// the in-memory transition still happens (the session is valid for
    /// this run).
    pub fn login(&mut self, identity: Identity, token: String) -> Result<()> {
        let persisted = self.store.save(&SessionRecord {
            identity: Some(identity.clone()),
            token: Some(token.clone()),
        });
        self.state = SessionState::Authenticated { identity, token };
        persisted
    }

    /// Drop the session. Callable from any state; clearing an absent record
    /// is a no-op.
    pub fn logout(&mut self) {
        let _ = self.store.clear();
        self.state = SessionState::Anonymous;
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        match &self.state {
            SessionState::Authenticated { identity, .. } => Some(identity),
            SessionState::Anonymous => None,
        }
    }

    pub fn token(&self) -> Option<&str> {
        match &self.state {
            SessionState::Authenticated { token, .. } => Some(token),
            SessionState::Anonymous => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity() -> Identity {
        Identity {
            id: "u1".to_string(),
            name: "Asha Rao".to_string(),
            mobile: "9999999999".to_string(),
        }
    }

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::with_root(dir.path())
    }

    #[test]
    fn bootstrap_without_record_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let auth = AuthSession::bootstrap(store_in(&dir));
        assert!(auth.current_identity().is_none());
        assert!(auth.token().is_none());
    }

    #[test]
    fn bootstrap_with_token_but_no_identity_is_anonymous_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&SessionRecord {
                identity: None,
                token: Some("abc123".to_string()),
            })
            .unwrap();

        let auth = AuthSession::bootstrap(store_in(&dir));
        assert!(auth.current_identity().is_none());
        assert!(store_in(&dir).load().is_none());
    }

    #[test]
    fn bootstrap_with_identity_but_no_token_is_anonymous_and_clears() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store
            .save(&SessionRecord {
                identity: Some(identity()),
                token: None,
            })
            .unwrap();

        let auth = AuthSession::bootstrap(store_in(&dir));
        assert!(auth.current_identity().is_none());
        assert!(store_in(&dir).load().is_none());
    }

    #[test]
    fn login_reflects_immediately_and_persists_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = AuthSession::bootstrap(store_in(&dir));

        auth.login(identity(), "abc123".to_string()).unwrap();
        assert_eq!(auth.current_identity().unwrap().name, "Asha Rao");
        assert_eq!(auth.token(), Some("abc123"));

        let record = store_in(&dir).load().unwrap();
        assert_eq!(record.identity.unwrap().mobile, "9999999999");
        assert_eq!(record.token.unwrap(), "abc123");
    }

    #[test]
    fn session_survives_a_restart() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = AuthSession::bootstrap(store_in(&dir));
        auth.login(identity(), "abc123".to_string()).unwrap();

        let rehydrated = AuthSession::bootstrap(store_in(&dir));
        assert_eq!(rehydrated.current_identity().unwrap().id, "u1");
        assert_eq!(rehydrated.token(), Some("abc123"));
    }

    #[test]
    fn login_while_authenticated_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = AuthSession::bootstrap(store_in(&dir));
        auth.login(identity(), "abc123".to_string()).unwrap();

        let other = Identity {
            id: "u2".to_string(),
            name: "Ravi Iyer".to_string(),
            mobile: "8888888888".to_string(),
        };
        auth.login(other, "def456".to_string()).unwrap();

        assert_eq!(auth.current_identity().unwrap().name, "Ravi Iyer");
        assert_eq!(store_in(&dir).load().unwrap().token.unwrap(), "def456");
    }

    #[test]
    fn logout_clears_state_and_store_and_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let mut auth = AuthSession::bootstrap(store_in(&dir));
        auth.login(identity(), "abc123".to_string()).unwrap();

        auth.logout();
        assert!(auth.current_identity().is_none());
        assert!(store_in(&dir).load().is_none());

        // A second logout, and one from a fresh anonymous session, are
        // both no-ops.
        auth.logout();
        let mut anonymous = AuthSession::bootstrap(store_in(&dir));
        anonymous.logout();
        assert!(anonymous.current_identity().is_none());
    }
}

//! Shared application state for HTTP handlers

use std::sync::Arc;

use super::auth::{AuthError, JwtAuth};
use crate::config::ServerConfig;
use crate::event_store::EventStore;

/// State handed to every handler
pub struct AppState {
    /// The stat log
    pub store: Arc<EventStore>,
    /// Token issuer and verifier for the sign-in gate; shared with blocking
    /// tasks that run password checks
    pub auth: Arc<JwtAuth>,
    /// Whether `POST /api/stats` requires a bearer token
    pub require_auth: bool,
}

impl AppState {
    pub fn new(store: Arc<EventStore>, auth: JwtAuth, require_auth: bool) -> Self {
        Self {
            store,
            auth: Arc::new(auth),
            require_auth,
        }
    }

    /// Build state from configuration around the given store
    pub fn from_config(store: Arc<EventStore>, config: &ServerConfig) -> Result<Self, AuthError> {
        let auth = JwtAuth::from_config(config)?;
        if !config.require_auth {
            tracing::warn!(
                "Sign-in gate is cosmetic: POST /api/stats accepts requests without a token \
                 (set VOLLEY_REQUIRE_AUTH=true to enforce)"
            );
        }
        Ok(Self::new(store, auth, config.require_auth))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{SetNumber, StatEvent, StatKind};

    #[test]
    fn test_state_shares_store() {
        let store = Arc::new(EventStore::new());
        let state = AppState::new(
            Arc::clone(&store),
            JwtAuth::with_hash_cost("test-secret-key-that-is-at-least-32-characters-long", 4),
            false,
        );

        store.append(StatEvent::record("A".to_string(), StatKind::Kill, SetNumber::new(1.0).unwrap()));
        assert_eq!(state.store.len(), 1);
        assert!(!state.require_auth);
    }
}

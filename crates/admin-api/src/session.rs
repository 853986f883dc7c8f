//! Source of the session token appended to outgoing requests

use admin_config::SessionStore;

/// Supplies the persisted session token
pub trait SessionProvider: Send + Sync {
    /// Current token, `None` when signed out or expired
    fn session_token(&self) -> Option<String>;
}

/// Fixed token, for tests and scripted use
#[derive(Debug, Clone, Default)]
pub struct StaticToken(pub Option<String>);

impl StaticToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(token.into()))
    }

    pub fn none() -> Self {
        Self(None)
    }
}

impl SessionProvider for StaticToken {
    fn session_token(&self) -> Option<String> {
        self.0.clone()
    }
}

impl SessionProvider for SessionStore {
    fn session_token(&self) -> Option<String> {
        self.token()
    }
}

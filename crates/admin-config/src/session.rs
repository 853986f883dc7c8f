//! Session token persistence
//!
//! The admin API authenticates every request with a `session_token` issued at
//! sign-in. The token is kept in `~/.config/admin-console/session.toml` and
//! expires after a configurable number of days (30 by default).

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::paths;

const SESSION_VERSION: u32 = 1;

/// Session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionMeta {
    pub last_modified: DateTime<Utc>,
    pub version: u32,
}

/// Session data - the actual persisted state
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SessionData {
    pub token: Option<String>,
    pub expires_at: Option<DateTime<Utc>>,
    /// Token must only travel over https
    #[serde(default)]
    pub secure: bool,
}

/// Complete session with metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub meta: SessionMeta,
    #[serde(default)]
    pub session: SessionData,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            meta: SessionMeta {
                last_modified: Utc::now(),
                version: SESSION_VERSION,
            },
            session: SessionData::default(),
        }
    }
}

impl Session {
    /// Load the session from the config dir, or start empty
    pub fn load() -> Self {
        if let Ok(path) = paths::session_path() {
            if path.exists() {
                match Self::load_from_path(&path) {
                    Ok(session) => {
                        log::info!("Loaded session from {:?}", path);
                        return session;
                    }
                    Err(e) => log::warn!("{:#}", e),
                }
            }
        }

        log::info!("No existing session found, using defaults");
        Self::default()
    }

    /// Load session from specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read session file: {:?}", path))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse session file: {:?}", path))
    }

    /// Save session to specific path
    pub fn save_to_path(&mut self, path: &Path) -> Result<()> {
        self.meta.last_modified = Utc::now();
        let content = toml::to_string_pretty(self).context("Failed to serialize session")?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, content)
            .with_context(|| format!("Failed to write session file: {:?}", path))?;

        log::info!("Saved session to {:?}", path);
        Ok(())
    }

    /// Store a freshly issued token valid for `ttl_days` from now
    pub fn set_token(&mut self, token: impl Into<String>, ttl_days: i64, secure: bool) {
        self.session.token = Some(token.into());
        self.session.expires_at = Some(Utc::now() + Duration::days(ttl_days));
        self.session.secure = secure;
    }

    /// Forget the stored token
    pub fn clear(&mut self) {
        self.session = SessionData::default();
    }

    /// The token, unless it has expired
    pub fn token(&self) -> Option<&str> {
        self.token_at(Utc::now())
    }

    /// The token as seen at `now`
    pub fn token_at(&self, now: DateTime<Utc>) -> Option<&str> {
        match self.session.expires_at {
            Some(expires_at) if expires_at <= now => None,
            _ => self.session.token.as_deref(),
        }
    }

    pub fn is_secure(&self) -> bool {
        self.session.secure
    }
}

/// Shared, optionally file-backed session handle
///
/// Cloning is cheap; all clones see the same token.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<Session>>,
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Load the persisted session from the config dir
    pub fn load() -> Result<Self> {
        let path = paths::session_path()?;
        Ok(Self {
            inner: Arc::new(RwLock::new(Session::load())),
            path: Some(path),
        })
    }

    /// Session that lives only in memory
    pub fn in_memory(session: Session) -> Self {
        Self {
            inner: Arc::new(RwLock::new(session)),
            path: None,
        }
    }

    /// Session backed by an explicit file
    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let session = if path.exists() {
            Session::load_from_path(&path)?
        } else {
            Session::default()
        };
        Ok(Self {
            inner: Arc::new(RwLock::new(session)),
            path: Some(path),
        })
    }

    /// Current, non-expired token
    pub fn token(&self) -> Option<String> {
        let session = self.inner.read().ok()?;
        session.token().map(str::to_string)
    }

    pub fn is_secure(&self) -> bool {
        self.inner.read().map(|s| s.is_secure()).unwrap_or(false)
    }

    /// Replace the token and persist it when file-backed
    pub fn set_token(&self, token: impl Into<String>, ttl_days: i64, secure: bool) -> Result<()> {
        let mut session = self
            .inner
            .write()
            .map_err(|_| anyhow::anyhow!("Session lock poisoned"))?;
        session.set_token(token, ttl_days, secure);
        self.persist(&mut session)
    }

    /// Drop the token and persist the empty session when file-backed
    pub fn clear(&self) -> Result<()> {
        let mut session = self
            .inner
            .write()
            .map_err(|_| anyhow::anyhow!("Session lock poisoned"))?;
        session.clear();
        self.persist(&mut session)
    }

    fn persist(&self, session: &mut Session) -> Result<()> {
        match &self.path {
            Some(path) => session.save_to_path(path),
            None => Ok(()),
        }
    }
}

//! Application configuration
//!
//! Configuration loaded from `.admin-console.toml`.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from `.admin-console.toml`
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Scheme and host of the admin API (e.g., "https://admin.example.com")
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Path prefix prepended to every endpoint name
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Lifetime of a stored session token in days
    #[serde(default = "default_session_ttl_days")]
    pub session_ttl_days: i64,

    /// Only send the session token over https
    #[serde(default = "default_secure_session")]
    pub secure_session: bool,
}

fn default_api_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_api_base() -> String {
    "/v1/".to_string()
}

fn default_session_ttl_days() -> i64 {
    30
}

fn default_secure_session() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_base: default_api_base(),
            session_ttl_days: default_session_ttl_days(),
            secure_session: default_secure_session(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        if let Some(file) = crate::load_config_file() {
            match toml::from_str(&file.content) {
                Ok(config) => {
                    log::info!("Loaded app config from {}", file.path.display());
                    return config;
                }
                Err(e) => {
                    log::warn!("Failed to parse {}: {}", file.path.display(), e);
                }
            }
        }

        log::debug!("Using default app config");
        Self::default()
    }

    /// Replace the API url, e.g. from an environment override
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Whether the configured API is reached over https
    pub fn is_https(&self) -> bool {
        self.api_url.starts_with("https://")
    }
}

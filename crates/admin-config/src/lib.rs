//! Configuration and session persistence for the course admin console
//!
//! This crate provides:
//! - File path utilities for config, cache and session files
//! - Configuration file loading (TOML)
//! - Application configuration (AppConfig)
//! - The persisted session token (Session, SessionStore)

pub mod app_config;
pub mod config_file;
pub mod paths;
pub mod session;

pub use app_config::AppConfig;
pub use config_file::{find_config_file, load_config_file, ConfigFile};
pub use paths::{cache_dir, config_dir, session_path};
pub use session::{Session, SessionStore};

/// Name used for config, cache and log directories
pub const APP_NAME: &str = "admin-console";

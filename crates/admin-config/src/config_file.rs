//! Locating `.admin-console.toml`

use std::path::{Path, PathBuf};

/// File name looked up in the working directory and in the home directory
pub const CONFIG_FILE: &str = ".admin-console.toml";

/// A config file that was found and read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub content: String,
}

/// Places searched for the config file, most specific first
pub fn config_candidates() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(CONFIG_FILE));
    }
    candidates
}

/// Read the first readable config file from the working directory or home
pub fn load_config_file() -> Option<ConfigFile> {
    find_config_file(&config_candidates())
}

/// Read the first readable file among `candidates`
pub fn find_config_file(candidates: &[PathBuf]) -> Option<ConfigFile> {
    candidates.iter().find_map(|path| read_candidate(path))
}

fn read_candidate(path: &Path) -> Option<ConfigFile> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(ConfigFile {
            path: path.to_path_buf(),
            content,
        }),
        Err(e) => {
            log::trace!("No config at {}: {}", path.display(), e);
            None
        }
    }
}

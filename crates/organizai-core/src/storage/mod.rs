mod config;

pub use config::{ApiConfig, Config, PlannerConfig};

use std::path::PathBuf;

use crate::error::ConfigError;

/// Path of `~/.config/organizai[-dev]/` based on ORGANIZAI_ENV, without
/// touching the filesystem.
pub fn config_dir() -> PathBuf {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("ORGANIZAI_ENV").unwrap_or_else(|_| "production".to_string());

    if env == "dev" {
        base_dir.join("organizai-dev")
    } else {
        base_dir.join("organizai")
    }
}

/// Returns `~/.config/organizai[-dev]/`, creating it if needed.
///
/// Set ORGANIZAI_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> Result<PathBuf, ConfigError> {
    let dir = config_dir();
    std::fs::create_dir_all(&dir)
        .map_err(|e| ConfigError::DirUnavailable(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}

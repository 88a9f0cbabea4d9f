use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Failed to determine config directory: {0}")]
    ConfigDirError(String),
}

/// Get the standard configuration directory for the current platform
pub fn get_config_dir() -> Result<PathBuf, SetupError> {
    // Prefer ~/.config/colorspace on Unix-like systems, fall back to platform defaults
    if cfg!(unix) {
        if let Some(mut home_path) = dirs::home_dir() {
            home_path.push(".config");
            home_path.push(CONFIG_DIR_NAME);
            return Ok(home_path);
        }
    }

    dirs::config_dir()
        .map(|mut path| {
            path.push(CONFIG_DIR_NAME);
            path
        })
        .ok_or_else(|| {
            SetupError::ConfigDirError("Unable to determine config directory".to_string())
        })
}

/// Get the standard configuration file path
pub fn get_config_file_path() -> Result<PathBuf, SetupError> {
    let mut config_dir = get_config_dir()?;
    config_dir.push(CONFIG_FILE_NAME);
    Ok(config_dir)
}

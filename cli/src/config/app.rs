use super::LoggingConfig;
use crate::constants::DEFAULT_SETTINGS_FILE;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// Host settings document; relative paths resolve against the workspace.
    settings_file: Option<String>,

    #[serde(default)]
    logging: LoggingConfig,
}

impl AppConfig {
    pub fn logging(&self) -> &LoggingConfig {
        &self.logging
    }

    pub fn settings_file_override(&self) -> Option<&str> {
        self.settings_file.as_deref()
    }

    /// Settings document to read and write for `workspace`.
    pub fn settings_file(&self, workspace: &Path) -> PathBuf {
        match self.settings_file.as_deref() {
            Some(path) if Path::new(path).is_absolute() => PathBuf::from(path),
            Some(path) => workspace.join(path),
            None => workspace.join(DEFAULT_SETTINGS_FILE),
        }
    }
}

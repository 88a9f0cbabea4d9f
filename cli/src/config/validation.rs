use super::app::AppConfig;

/// Accepted values of `[logging] level`.
pub const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid logging level: {configured}")]
    LogLevel { configured: String },
    #[error("Invalid settings_file: value is empty")]
    EmptySettingsFile,
}

impl ConfigValidationError {
    pub fn user_message(&self) -> String {
        match self {
            ConfigValidationError::LogLevel { configured } => {
                format!(
                    "Unknown logging level!\n\n\
                    Your configured value: {configured}\n\
                    Valid values: {}\n\n\
                    Please update [logging] level in config.toml.",
                    LOG_LEVELS.join(", ")
                )
            }
            ConfigValidationError::EmptySettingsFile => {
                "Settings file path is empty!\n\n\
                Remove settings_file from config.toml to use .vscode/settings.json, \
                or point it at a settings document."
                    .to_string()
            }
        }
    }
}

/// Configuration loading result
#[derive(Debug)]
pub enum ConfigLoadResult {
    Success(Box<AppConfig>),
    LoadError(String),
    DeserializeError(String),
}

impl AppConfig {
    /// Validate the configuration against accepted values
    pub fn validate(&self) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        let level = self.logging().level().to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::LogLevel {
                configured: self.logging().level().to_string(),
            });
        }

        if self
            .settings_file_override()
            .is_some_and(|path| path.trim().is_empty())
        {
            errors.push(ConfigValidationError::EmptySettingsFile);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

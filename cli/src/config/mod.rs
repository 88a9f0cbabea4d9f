use crate::constants::env_vars::{ENV_PREFIX, ENV_SEPARATOR};
use crate::error::{AppError, AppResult};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::path::Path;

pub mod app;
pub mod setup;
pub mod validation;

pub use app::AppConfig;
pub use validation::{ConfigLoadResult, ConfigValidationError};

/// Global configuration loading and access
static CONFIG: std::sync::OnceLock<ConfigLoadResult> = std::sync::OnceLock::new();

fn load_config() -> ConfigLoadResult {
    dotenv::dotenv().ok();

    // A missing config directory only disables the file layer
    let config_file = setup::get_config_file_path().ok();
    load_config_from(config_file.as_deref())
}

/// Build the configuration from an optional TOML file plus `COLORSPACE__`
/// environment overrides.
pub fn load_config_from(config_file: Option<&Path>) -> ConfigLoadResult {
    let mut builder = Config::builder();
    if let Some(path) = config_file {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
    }
    let env_source = Environment::with_prefix(ENV_PREFIX).separator(ENV_SEPARATOR);

    let config = match builder.add_source(env_source).build() {
        Ok(config) => config,
        Err(e) => {
            return ConfigLoadResult::LoadError(format!(
                "Configuration loading failed: {e}. Please check your config.toml file and environment variables."
            ));
        }
    };

    match config.try_deserialize::<AppConfig>() {
        Ok(app_config) => {
            if let Err(validation_errors) = app_config.validate() {
                let error_messages: Vec<String> =
                    validation_errors.iter().map(|e| e.user_message()).collect();
                return ConfigLoadResult::DeserializeError(format!(
                    "Configuration validation failed:\n{}",
                    error_messages.join("\n\n")
                ));
            }
            ConfigLoadResult::Success(Box::new(app_config))
        }
        Err(e) => ConfigLoadResult::DeserializeError(format!("Failed to deserialize config: {e}")),
    }
}

pub fn get_config() -> &'static ConfigLoadResult {
    CONFIG.get_or_init(load_config)
}

/// The loaded configuration, or the reason it could not be loaded.
pub fn get_app_config() -> AppResult<&'static AppConfig> {
    match get_config() {
        ConfigLoadResult::Success(config) => Ok(config),
        ConfigLoadResult::LoadError(e) => Err(AppError::Config(e.clone())),
        ConfigLoadResult::DeserializeError(e) => Err(AppError::Config(e.clone())),
    }
}

/// Additional logging configuration
#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingConfig {
    level: Option<String>,
    file: Option<String>,
}

impl LoggingConfig {
    pub fn level(&self) -> &str {
        self.level.as_deref().unwrap_or("info")
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }
}

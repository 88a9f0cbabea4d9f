//! Shared constants for the command line front end.

pub mod env_vars;

/// Directory under the user's config root holding `config.toml`.
pub const CONFIG_DIR_NAME: &str = "colorspace";

pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Host settings document, relative to the workspace root.
pub const DEFAULT_SETTINGS_FILE: &str = ".vscode/settings.json";

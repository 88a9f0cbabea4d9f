/// Environment variable naming used by the config loader.
///
/// Every configuration key can be overridden with a `COLORSPACE__` variable;
/// nested keys are joined with `__`, e.g. `COLORSPACE__LOGGING__LEVEL=debug`
/// or `COLORSPACE__SETTINGS_FILE=/tmp/settings.json`.
pub const ENV_PREFIX: &str = "COLORSPACE";
pub const ENV_SEPARATOR: &str = "__";

use crate::host::SettingsMap;
use serde_json::Value;

/// Which chrome regions `apply_color` writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorElements {
    pub activity_bar: bool,
    pub side_bar: bool,
    pub status_bar: bool,
}

impl Default for ColorElements {
    fn default() -> Self {
        Self {
            activity_bar: true,
            side_bar: true,
            status_bar: false,
        }
    }
}

/// Options read from the `colorspace` settings section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorSpaceOptions {
    pub auto_color: bool,
    pub color_elements: ColorElements,
}

impl Default for ColorSpaceOptions {
    fn default() -> Self {
        Self {
            auto_color: true,
            color_elements: ColorElements::default(),
        }
    }
}

impl ColorElements {
    /// Read each region flag on its own; missing or non-boolean flags keep
    /// their default.
    fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        let Value::Object(flags) = value else {
            log::warn!("Invalid colorspace.colorElements, using defaults: {value}");
            return defaults;
        };

        Self {
            activity_bar: bool_flag(flags, "activityBar", defaults.activity_bar),
            side_bar: bool_flag(flags, "sideBar", defaults.side_bar),
            status_bar: bool_flag(flags, "statusBar", defaults.status_bar),
        }
    }
}

impl ColorSpaceOptions {
    /// Parse the section key by key. A malformed value only resets its own
    /// key to the default.
    pub fn from_section(section: SettingsMap) -> Self {
        let defaults = Self::default();
        Self {
            auto_color: bool_flag(&section, "autoColor", defaults.auto_color),
            color_elements: section
                .get("colorElements")
                .filter(|value| !value.is_null())
                .map_or(defaults.color_elements, ColorElements::from_value),
        }
    }
}

fn bool_flag(map: &SettingsMap, key: &str, default: bool) -> bool {
    match map.get(key) {
        None | Some(Value::Null) => default,
        Some(Value::Bool(flag)) => *flag,
        Some(other) => {
            log::warn!("Invalid colorspace setting {key} = {other}, using {default}");
            default
        }
    }
}

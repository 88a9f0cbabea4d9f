//! # Color Scheme Data Model
//!
//! Value types shared by the palette, the project store and the manager.
//! Every type serializes with the camelCase field names used by the
//! per-project `colorspace.json` document and by the panel protocol.
//!
//! A [`ColorScheme`] is always handled by value: the project document stores
//! a full copy of the current scheme, so later edits to a custom scheme with
//! the same name never change what was applied.

pub mod validation;

use serde::{Deserialize, Deserializer, Serialize};

/// Default foreground used by schemes created from just two backgrounds.
pub const DEFAULT_FOREGROUND: &str = "#ffffff";
/// Default inactive activity bar foreground for custom schemes.
pub const DEFAULT_INACTIVE_FOREGROUND: &str = "#a0a0a0";
/// Default side bar foreground for custom schemes.
pub const DEFAULT_SIDE_BAR_FOREGROUND: &str = "#e0e0e0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityBarColors {
    pub background: String,
    pub foreground: String,
    pub inactive_foreground: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBarColors {
    pub background: String,
    pub foreground: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBarTitleColors {
    pub foreground: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBarColors {
    pub background: String,
    pub foreground: String,
}

/// A named set of chrome colors for one workspace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorScheme {
    pub name: String,
    pub activity_bar: ActivityBarColors,
    pub side_bar: SideBarColors,
    pub side_bar_title: SideBarTitleColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_bar: Option<StatusBarColors>,
}

impl ColorScheme {
    /// Build a custom scheme from a name and the two backgrounds a user picks.
    ///
    /// Foregrounds use the light defaults and the status bar mirrors the
    /// activity bar background.
    pub fn from_backgrounds(
        name: impl Into<String>,
        activity_bar_background: impl Into<String>,
        side_bar_background: impl Into<String>,
    ) -> Self {
        let activity_bar_background = activity_bar_background.into();
        Self {
            name: name.into(),
            activity_bar: ActivityBarColors {
                background: activity_bar_background.clone(),
                foreground: DEFAULT_FOREGROUND.to_string(),
                inactive_foreground: DEFAULT_INACTIVE_FOREGROUND.to_string(),
            },
            side_bar: SideBarColors {
                background: side_bar_background.into(),
                foreground: DEFAULT_SIDE_BAR_FOREGROUND.to_string(),
            },
            side_bar_title: SideBarTitleColors {
                foreground: DEFAULT_FOREGROUND.to_string(),
            },
            status_bar: Some(StatusBarColors {
                background: activity_bar_background,
                foreground: DEFAULT_FOREGROUND.to_string(),
            }),
        }
    }
}

/// The per-workspace persisted unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_color: Option<ColorScheme>,
    #[serde(default, deserialize_with = "deserialize_custom_colors")]
    pub custom_colors: Vec<ColorScheme>,
}

impl ProjectConfig {
    pub fn is_empty(&self) -> bool {
        self.current_color.is_none() && self.custom_colors.is_empty()
    }
}

// Hand-edited documents may carry `null` entries or a `null` list.
fn deserialize_custom_colors<'de, D>(deserializer: D) -> Result<Vec<ColorScheme>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries: Option<Vec<Option<ColorScheme>>> = Option::deserialize(deserializer)?;
    Ok(entries.unwrap_or_default().into_iter().flatten().collect())
}

/// All schemes offered to the user, split by origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AvailableColors {
    pub fixed: Vec<ColorScheme>,
    pub custom: Vec<ColorScheme>,
}

/// Where a selectable scheme comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorOrigin {
    Fixed,
    Custom,
}

impl ColorOrigin {
    pub fn label(&self) -> &'static str {
        match self {
            ColorOrigin::Fixed => "Fixed",
            ColorOrigin::Custom => "Custom",
        }
    }
}

/// One entry of the flattened fixed + custom picker list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorChoice {
    pub label: String,
    pub origin: ColorOrigin,
    pub detail: String,
    pub scheme: ColorScheme,
}

impl ColorChoice {
    pub fn new(scheme: ColorScheme, origin: ColorOrigin) -> Self {
        Self {
            label: scheme.name.clone(),
            origin,
            detail: scheme.activity_bar.background.clone(),
            scheme,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scheme_uses_camel_case_fields() {
        let scheme = ColorScheme::from_backgrounds("Mine", "#112233", "#445566");
        let value = serde_json::to_value(&scheme).unwrap();

        assert_eq!(value["activityBar"]["inactiveForeground"], "#a0a0a0");
        assert_eq!(value["sideBarTitle"]["foreground"], "#ffffff");
        assert_eq!(value["statusBar"]["background"], "#112233");
    }

    #[test]
    fn test_missing_status_bar_is_omitted() {
        let mut scheme = ColorScheme::from_backgrounds("Mine", "#112233", "#445566");
        scheme.status_bar = None;
        let value = serde_json::to_value(&scheme).unwrap();

        assert!(value.get("statusBar").is_none());
    }

    #[test]
    fn test_missing_custom_colors_defaults_to_empty() {
        let config: ProjectConfig = serde_json::from_value(json!({})).unwrap();
        assert!(config.is_empty());

        let config: ProjectConfig =
            serde_json::from_value(json!({ "customColors": null })).unwrap();
        assert!(config.custom_colors.is_empty());
    }

    #[test]
    fn test_null_custom_entries_are_dropped() {
        let scheme = ColorScheme::from_backgrounds("Kept", "#010203", "#040506");
        let config: ProjectConfig = serde_json::from_value(json!({
            "customColors": [null, scheme, null]
        }))
        .unwrap();

        assert_eq!(config.custom_colors, vec![scheme]);
    }

    #[test]
    fn test_choice_detail_is_activity_bar_background() {
        let scheme = ColorScheme::from_backgrounds("Mine", "#abcdef", "#000000");
        let choice = ColorChoice::new(scheme, ColorOrigin::Custom);

        assert_eq!(choice.label, "Mine");
        assert_eq!(choice.detail, "#abcdef");
        assert_eq!(choice.origin.label(), "Custom");
    }
}

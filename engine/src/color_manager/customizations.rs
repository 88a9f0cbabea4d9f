use crate::color_manager::options::ColorElements;
use crate::host::SettingsMap;
use crate::model::ColorScheme;
use serde_json::Value;

pub const ACTIVITY_BAR_BACKGROUND: &str = "activityBar.background";
pub const ACTIVITY_BAR_FOREGROUND: &str = "activityBar.foreground";
pub const ACTIVITY_BAR_INACTIVE_FOREGROUND: &str = "activityBar.inactiveForeground";
pub const SIDE_BAR_BACKGROUND: &str = "sideBar.background";
pub const SIDE_BAR_FOREGROUND: &str = "sideBar.foreground";
pub const SIDE_BAR_TITLE_FOREGROUND: &str = "sideBarTitle.foreground";
pub const STATUS_BAR_BACKGROUND: &str = "statusBar.background";
pub const STATUS_BAR_FOREGROUND: &str = "statusBar.foreground";
pub const STATUS_BAR_NO_FOLDER_BACKGROUND: &str = "statusBar.noFolderBackground";

/// Every key this crate may write into `workbench.colorCustomizations`.
pub const COLOR_CUSTOMIZATION_KEYS: [&str; 9] = [
    ACTIVITY_BAR_BACKGROUND,
    ACTIVITY_BAR_FOREGROUND,
    ACTIVITY_BAR_INACTIVE_FOREGROUND,
    SIDE_BAR_BACKGROUND,
    SIDE_BAR_FOREGROUND,
    SIDE_BAR_TITLE_FOREGROUND,
    STATUS_BAR_BACKGROUND,
    STATUS_BAR_FOREGROUND,
    STATUS_BAR_NO_FOLDER_BACKGROUND,
];

/// The `(key, value)` pairs `scheme` contributes for the enabled regions.
pub fn scheme_entries<'a>(
    scheme: &'a ColorScheme,
    elements: &ColorElements,
) -> Vec<(&'static str, &'a str)> {
    let mut entries = Vec::with_capacity(COLOR_CUSTOMIZATION_KEYS.len());

    if elements.activity_bar {
        entries.push((ACTIVITY_BAR_BACKGROUND, scheme.activity_bar.background.as_str()));
        entries.push((ACTIVITY_BAR_FOREGROUND, scheme.activity_bar.foreground.as_str()));
        entries.push((
            ACTIVITY_BAR_INACTIVE_FOREGROUND,
            scheme.activity_bar.inactive_foreground.as_str(),
        ));
    }

    if elements.side_bar {
        entries.push((SIDE_BAR_BACKGROUND, scheme.side_bar.background.as_str()));
        entries.push((SIDE_BAR_FOREGROUND, scheme.side_bar.foreground.as_str()));
        entries.push((
            SIDE_BAR_TITLE_FOREGROUND,
            scheme.side_bar_title.foreground.as_str(),
        ));
    }

    if elements.status_bar {
        if let Some(status_bar) = &scheme.status_bar {
            entries.push((STATUS_BAR_BACKGROUND, status_bar.background.as_str()));
            entries.push((STATUS_BAR_FOREGROUND, status_bar.foreground.as_str()));
            entries.push((STATUS_BAR_NO_FOLDER_BACKGROUND, status_bar.background.as_str()));
        }
    }

    entries
}

/// Write the scheme's enabled regions into `customizations`, leaving every
/// other key alone. Returns the number of keys written.
pub fn merge_scheme(
    customizations: &mut SettingsMap,
    scheme: &ColorScheme,
    elements: &ColorElements,
) -> usize {
    let entries = scheme_entries(scheme, elements);
    let written = entries.len();
    for (key, value) in entries {
        customizations.insert(key.to_string(), Value::String(value.to_string()));
    }
    written
}

/// Remove exactly the known keys. Returns how many were present.
pub fn strip_scheme(customizations: &mut SettingsMap) -> usize {
    COLOR_CUSTOMIZATION_KEYS
        .iter()
        .filter(|key| customizations.remove(**key).is_some())
        .count()
}

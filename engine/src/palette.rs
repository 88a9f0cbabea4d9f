//! The fixed palette offered to every workspace.
//!
//! Twelve schemes, indexed `0..12`, never mutated at runtime. Each entry
//! shares the same light foregrounds and mirrors its activity bar background
//! into the status bar.

use crate::model::{
    ActivityBarColors, ColorScheme, SideBarColors, SideBarTitleColors, StatusBarColors,
};
use once_cell::sync::Lazy;

/// Number of schemes in [`FIXED_PALETTE`].
pub const FIXED_PALETTE_LEN: usize = 12;

const PALETTE_FOREGROUND: &str = "#ffffff";
const PALETTE_SIDE_BAR_FOREGROUND: &str = "#e0e0e0";

// (name, activity bar background, inactive foreground, side bar background)
const PALETTE_TABLE: [(&str, &str, &str, &str); FIXED_PALETTE_LEN] = [
    ("Ocean Blue", "#1e3a5f", "#a0b5cc", "#243a52"),
    ("Forest Green", "#2d5016", "#a8c99c", "#344d20"),
    ("Deep Purple", "#4a148c", "#c5a3e0", "#5e1d9e"),
    ("Crimson Red", "#7f1d1d", "#f5b5b5", "#8f2626"),
    ("Amber Orange", "#b45309", "#ffd699", "#c76110"),
    ("Teal Cyan", "#0f5e5e", "#a0d4d4", "#166e6e"),
    ("Magenta Pink", "#831843", "#f5a3c7", "#9d1f50"),
    ("Indigo Blue", "#1e3a8a", "#a5b4d4", "#2847a0"),
    ("Olive Green", "#4d5e1f", "#c9d4a0", "#5a6e26"),
    ("Slate Gray", "#334155", "#b0b8c4", "#3e4f63"),
    ("Brown Earth", "#5d3a1a", "#d4b89c", "#6e4520"),
    ("Navy Blue", "#172554", "#9ca8d4", "#1e3163"),
];

/// The fixed palette, in display order.
pub static FIXED_PALETTE: Lazy<Vec<ColorScheme>> = Lazy::new(|| {
    PALETTE_TABLE
        .iter()
        .map(|&(name, activity_bg, inactive_fg, side_bg)| {
            palette_scheme(name, activity_bg, inactive_fg, side_bg)
        })
        .collect()
});

fn palette_scheme(name: &str, activity_bg: &str, inactive_fg: &str, side_bg: &str) -> ColorScheme {
    ColorScheme {
        name: name.to_string(),
        activity_bar: ActivityBarColors {
            background: activity_bg.to_string(),
            foreground: PALETTE_FOREGROUND.to_string(),
            inactive_foreground: inactive_fg.to_string(),
        },
        side_bar: SideBarColors {
            background: side_bg.to_string(),
            foreground: PALETTE_SIDE_BAR_FOREGROUND.to_string(),
        },
        side_bar_title: SideBarTitleColors {
            foreground: PALETTE_FOREGROUND.to_string(),
        },
        status_bar: Some(StatusBarColors {
            background: activity_bg.to_string(),
            foreground: PALETTE_FOREGROUND.to_string(),
        }),
    }
}

/// Palette entry at `index`, if in range.
pub fn palette_color(index: usize) -> Option<&'static ColorScheme> {
    FIXED_PALETTE.get(index)
}

/// Whether `scheme` is equal by value to one of the palette entries.
pub fn is_palette_color(scheme: &ColorScheme) -> bool {
    FIXED_PALETTE.iter().any(|entry| entry == scheme)
}

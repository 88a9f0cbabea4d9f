use clap::{Args, Parser, Subcommand};
use engine::model::ColorScheme;
use std::path::PathBuf;

/// Give every workspace its own editor chrome colors.
#[derive(Debug, Parser)]
#[command(name = "colorspace", version, about)]
pub struct Cli {
    /// Workspace folder (defaults to the current directory)
    #[arg(long, short = 'w', global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Log at debug level or finer
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Re-apply the stored color, or assign a random one if none is stored
    Activate,
    /// Pick a fixed or custom color for this workspace
    ChangeColor,
    /// Forget this workspace's color and remove it from the settings
    ResetColor,
    /// Assign a random color from the built-in palette
    RandomColor,
    /// Define a custom color; prompts for whatever is not given
    AddCustomColor(CustomColorArgs),
    /// Show the color assigned to this workspace
    Current,
    /// List built-in and custom colors
    List,
    /// Change a custom color in place
    UpdateCustomColor {
        /// Position shown by `list`
        index: usize,
        #[command(flatten)]
        changes: CustomColorArgs,
    },
    /// Delete a custom color
    DeleteCustomColor {
        /// Position shown by `list`
        index: usize,
    },
    /// Serve the color panel protocol as JSON lines on stdin/stdout
    Panel,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Args)]
pub struct CustomColorArgs {
    /// Display name
    #[arg(long)]
    pub name: Option<String>,

    /// Activity bar (and status bar) background, e.g. #1e3a5f
    #[arg(long, value_name = "HEX")]
    pub activity_bar: Option<String>,

    /// Side bar background, e.g. #243a52
    #[arg(long, value_name = "HEX")]
    pub side_bar: Option<String>,
}

impl CustomColorArgs {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.activity_bar.is_none() && self.side_bar.is_none()
    }

    /// A complete scheme, if every field was given.
    pub fn to_scheme(&self) -> Option<ColorScheme> {
        match (&self.name, &self.activity_bar, &self.side_bar) {
            (Some(name), Some(activity_bar), Some(side_bar)) => Some(
                ColorScheme::from_backgrounds(name.clone(), activity_bar.clone(), side_bar.clone()),
            ),
            _ => None,
        }
    }

    /// Overlay the given fields on `scheme`. A new activity bar background
    /// also moves the status bar background, which mirrors it.
    pub fn apply_to(&self, mut scheme: ColorScheme) -> ColorScheme {
        if let Some(name) = &self.name {
            scheme.name = name.clone();
        }
        if let Some(background) = &self.activity_bar {
            scheme.activity_bar.background = background.clone();
            if let Some(status_bar) = scheme.status_bar.as_mut() {
                status_bar.background = background.clone();
            }
        }
        if let Some(background) = &self.side_bar {
            scheme.side_bar.background = background.clone();
        }
        scheme
    }
}

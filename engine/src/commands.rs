use crate::color_manager::ColorManager;
use crate::common::ColorSpaceResult;
use crate::host::{InputBoxOptions, Prompter};
use crate::model::ColorScheme;
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_ACTIVITY_BAR_BACKGROUND: &str = "#1e3a5f";
pub const DEFAULT_SIDE_BAR_BACKGROUND: &str = "#243a52";

/// Commands exposed on the host's command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandId {
    ChangeColor,
    ResetColor,
    RandomColor,
    AddCustomColor,
}

impl CommandId {
    pub const ALL: [CommandId; 4] = [
        CommandId::ChangeColor,
        CommandId::ResetColor,
        CommandId::RandomColor,
        CommandId::AddCustomColor,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            CommandId::ChangeColor => "colorspace.changeColor",
            CommandId::ResetColor => "colorspace.resetColor",
            CommandId::RandomColor => "colorspace.randomColor",
            CommandId::AddCustomColor => "colorspace.addCustomColor",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            CommandId::ChangeColor => "Change Workspace Color",
            CommandId::ResetColor => "Reset Workspace Color",
            CommandId::RandomColor => "Pick Random Color",
            CommandId::AddCustomColor => "Add Custom Color",
        }
    }

    /// Run the command against `manager`, prompting through `prompter`.
    pub async fn execute(
        &self,
        manager: &ColorManager,
        prompter: &dyn Prompter,
    ) -> ColorSpaceResult<()> {
        log::debug!("Executing {}", self.id());
        match self {
            CommandId::ChangeColor => manager.show_color_picker(prompter).await,
            CommandId::ResetColor => manager.reset_color().await,
            CommandId::RandomColor => manager.pick_random_color().await,
            CommandId::AddCustomColor => match prompt_custom_color(prompter).await {
                Some(scheme) => manager.add_custom_color(&scheme).await,
                None => {
                    log::debug!("Custom color prompt dismissed");
                    Ok(())
                }
            },
        }
    }
}

impl fmt::Display for CommandId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for CommandId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CommandId::ALL
            .into_iter()
            .find(|command| command.id() == s)
            .ok_or_else(|| format!("Unknown command: {s}"))
    }
}

/// Ask for a name and two backgrounds. `None` if any prompt is dismissed or
/// left empty.
pub async fn prompt_custom_color(prompter: &dyn Prompter) -> Option<ColorScheme> {
    let name = prompt_non_empty(
        prompter,
        InputBoxOptions::new("Enter a name for your custom color", "My Custom Color"),
    )
    .await?;

    let activity_bar_background = prompt_non_empty(
        prompter,
        InputBoxOptions::new(
            "Enter Activity Bar background color (hex)",
            DEFAULT_ACTIVITY_BAR_BACKGROUND,
        )
        .with_value(DEFAULT_ACTIVITY_BAR_BACKGROUND),
    )
    .await?;

    let side_bar_background = prompt_non_empty(
        prompter,
        InputBoxOptions::new(
            "Enter Side Bar background color (hex)",
            DEFAULT_SIDE_BAR_BACKGROUND,
        )
        .with_value(DEFAULT_SIDE_BAR_BACKGROUND),
    )
    .await?;

    Some(ColorScheme::from_backgrounds(
        name,
        activity_bar_background,
        side_bar_background,
    ))
}

async fn prompt_non_empty(prompter: &dyn Prompter, options: InputBoxOptions) -> Option<String> {
    prompter
        .show_input_box(&options)
        .await
        .filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_ids_round_trip_through_from_str() {
        for command in CommandId::ALL {
            assert_eq!(command.id().parse::<CommandId>(), Ok(command));
        }
        assert!("colorspace.unknown".parse::<CommandId>().is_err());
    }

    #[test]
    fn test_command_ids_are_namespaced() {
        assert!(
            CommandId::ALL
                .iter()
                .all(|command| command.to_string().starts_with("colorspace."))
        );
    }
}

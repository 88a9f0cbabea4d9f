use crate::color_manager::customizations::{merge_scheme, strip_scheme};
use crate::color_manager::options::ColorSpaceOptions;
use crate::common::{ColorSpaceError, ColorSpaceResult};
use crate::host::{
    COLOR_CUSTOMIZATIONS_SECTION, COLORSPACE_SECTION, ColorSpaceContext, ConfigurationTarget,
    Notifier, Prompter, QuickPickItem, SettingsStore, WorkspaceProvider,
};
use crate::model::{AvailableColors, ColorChoice, ColorOrigin, ColorScheme};
use crate::palette::FIXED_PALETTE;
use crate::storage::ProjectStorage;
use rand::Rng;
use std::sync::Arc;

const PICKER_PLACEHOLDER: &str = "Select a color for this workspace";

/// Selection, persistence and application of workspace colors.
///
/// The only entry point the panel and the commands call. All host access
/// goes through the capabilities of the [`ColorSpaceContext`] it was built
/// from.
pub struct ColorManager {
    storage: ProjectStorage,
    workspace: Arc<dyn WorkspaceProvider>,
    settings: Arc<dyn SettingsStore>,
    notifier: Arc<dyn Notifier>,
}

impl ColorManager {
    pub fn new(context: ColorSpaceContext) -> Self {
        let storage = ProjectStorage::new(context.workspace.clone(), context.storage_listener);
        Self {
            storage,
            workspace: context.workspace,
            settings: context.settings,
            notifier: context.notifier,
        }
    }

    pub fn storage(&self) -> &ProjectStorage {
        &self.storage
    }

    pub fn has_workspace(&self) -> bool {
        self.workspace.root().is_some()
    }

    /// Report a missing workspace to the user; `true` when one is bound.
    fn require_workspace(&self) -> bool {
        if self.has_workspace() {
            return true;
        }
        self.notifier.error(&ColorSpaceError::NoWorkspace.user_message());
        false
    }

    pub async fn options(&self) -> ColorSpaceResult<ColorSpaceOptions> {
        let section = self.settings.get(COLORSPACE_SECTION).await?;
        Ok(ColorSpaceOptions::from_section(section))
    }

    /// The scheme assigned to the current workspace.
    pub async fn get_workspace_color(&self) -> Option<ColorScheme> {
        self.storage.get_current_color().await
    }

    pub async fn get_all_colors(&self) -> AvailableColors {
        AvailableColors {
            fixed: FIXED_PALETTE.clone(),
            custom: self.storage.get_custom_colors().await,
        }
    }

    /// Fixed then custom schemes, flattened for a picker.
    pub async fn color_choices(&self) -> Vec<ColorChoice> {
        let colors = self.get_all_colors().await;
        colors
            .fixed
            .into_iter()
            .map(|scheme| ColorChoice::new(scheme, ColorOrigin::Fixed))
            .chain(
                colors
                    .custom
                    .into_iter()
                    .map(|scheme| ColorChoice::new(scheme, ColorOrigin::Custom)),
            )
            .collect()
    }

    /// Persist `scheme` as the workspace color and apply it.
    pub async fn set_workspace_color(&self, scheme: &ColorScheme) -> ColorSpaceResult<()> {
        if !self.require_workspace() {
            return Ok(());
        }

        self.storage.set_current_color(scheme).await?;
        self.apply_color(scheme).await?;

        log::info!("Workspace color set to {}", scheme.name);
        self.notifier
            .info(&format!("Workspace color set to: {}", scheme.name));
        Ok(())
    }

    /// Run on activation and whenever the workspace folders change.
    ///
    /// Re-applies a persisted color (the host settings may have been reset
    /// behind our back); otherwise assigns a random palette entry.
    pub async fn auto_assign_color(&self) -> ColorSpaceResult<()> {
        if !self.options().await?.auto_color {
            log::debug!("Automatic color assignment disabled");
            return Ok(());
        }

        if let Some(existing) = self.get_workspace_color().await {
            log::debug!("Re-applying persisted color {}", existing.name);
            return self.apply_color(&existing).await;
        }

        let scheme = random_palette_color();
        log::debug!("Auto-assigning palette color {}", scheme.name);
        self.set_workspace_color(scheme).await
    }

    /// Merge the enabled regions of `scheme` into the host's color
    /// customizations, preserving every other key.
    pub async fn apply_color(&self, scheme: &ColorScheme) -> ColorSpaceResult<()> {
        let options = self.options().await?;
        let mut customizations = self.settings.get(COLOR_CUSTOMIZATIONS_SECTION).await?;

        let written = merge_scheme(&mut customizations, scheme, &options.color_elements);
        log::debug!("Applying {} ({written} color keys)", scheme.name);

        self.settings
            .update(
                COLOR_CUSTOMIZATIONS_SECTION,
                customizations,
                ConfigurationTarget::Workspace,
            )
            .await
    }

    /// Forget the workspace color and remove the keys this crate writes.
    pub async fn reset_color(&self) -> ColorSpaceResult<()> {
        if !self.require_workspace() {
            return Ok(());
        }

        self.storage.reset().await;

        let mut customizations = self.settings.get(COLOR_CUSTOMIZATIONS_SECTION).await?;
        let removed = strip_scheme(&mut customizations);
        log::debug!("Removed {removed} color keys");

        self.settings
            .update(
                COLOR_CUSTOMIZATIONS_SECTION,
                customizations,
                ConfigurationTarget::Workspace,
            )
            .await?;

        self.notifier.info("Workspace color reset to default");
        Ok(())
    }

    pub async fn pick_random_color(&self) -> ColorSpaceResult<()> {
        self.set_workspace_color(random_palette_color()).await
    }

    /// Let the user pick from fixed and custom schemes; dismissing is a no-op.
    pub async fn show_color_picker(&self, prompter: &dyn Prompter) -> ColorSpaceResult<()> {
        let choices = self.color_choices().await;
        let items: Vec<QuickPickItem> = choices
            .iter()
            .map(|choice| QuickPickItem {
                label: choice.label.clone(),
                description: choice.origin.label().to_string(),
                detail: choice.detail.clone(),
            })
            .collect();

        let Some(index) = prompter.show_quick_pick(&items, PICKER_PLACEHOLDER).await else {
            return Ok(());
        };

        match choices.get(index) {
            Some(choice) => self.set_workspace_color(&choice.scheme).await,
            None => {
                log::warn!("Picker returned out of range index {index}");
                Ok(())
            }
        }
    }

    pub async fn add_custom_color(&self, scheme: &ColorScheme) -> ColorSpaceResult<()> {
        self.storage.add_custom_color(scheme).await?;
        self.notifier
            .info(&format!("Custom color \"{}\" added", scheme.name));
        Ok(())
    }

    pub async fn update_custom_color(
        &self,
        index: usize,
        scheme: &ColorScheme,
    ) -> ColorSpaceResult<()> {
        self.storage.update_custom_color(index, scheme).await?;
        self.notifier
            .info(&format!("Custom color \"{}\" updated", scheme.name));
        Ok(())
    }

    /// Delete a custom color; an index outside the list is ignored.
    pub async fn delete_custom_color(&self, index: usize) -> ColorSpaceResult<()> {
        let custom_colors = self.storage.get_custom_colors().await;
        if index >= custom_colors.len() {
            log::debug!(
                "Ignoring delete of custom color {index} ({} defined)",
                custom_colors.len()
            );
            return Ok(());
        }

        let removed = self.storage.delete_custom_color(index).await?;
        self.notifier
            .info(&format!("Custom color \"{}\" deleted", removed.name));
        Ok(())
    }
}

fn random_palette_color() -> &'static ColorScheme {
    let index = rand::thread_rng().gen_range(0..FIXED_PALETTE.len());
    &FIXED_PALETTE[index]
}

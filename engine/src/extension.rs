use crate::color_manager::ColorManager;
use crate::commands::CommandId;
use crate::common::ColorSpaceResult;
use crate::host::{ColorSpaceContext, Prompter};
use crate::panel::ColorSpacePanel;
use std::sync::Arc;

/// Startup wiring: one manager and one panel per host session.
pub struct Extension {
    manager: Arc<ColorManager>,
    panel: Arc<ColorSpacePanel>,
}

impl Extension {
    pub fn new(context: ColorSpaceContext) -> Self {
        let manager = Arc::new(ColorManager::new(context));
        let panel = Arc::new(ColorSpacePanel::new(manager.clone()));
        Self { manager, panel }
    }

    pub fn manager(&self) -> &Arc<ColorManager> {
        &self.manager
    }

    pub fn panel(&self) -> &Arc<ColorSpacePanel> {
        &self.panel
    }

    /// Called once when the host starts the extension.
    pub async fn activate(&self) -> ColorSpaceResult<()> {
        log::info!("ColorSpace is now active");
        self.manager.auto_assign_color().await?;
        self.panel.refresh().await
    }

    pub async fn workspace_folders_changed(&self) -> ColorSpaceResult<()> {
        log::debug!("Workspace folders changed");
        self.manager.auto_assign_color().await?;
        self.panel.refresh().await
    }

    pub async fn execute(
        &self,
        command: CommandId,
        prompter: &dyn Prompter,
    ) -> ColorSpaceResult<()> {
        command.execute(&self.manager, prompter).await?;
        self.panel.refresh().await
    }

    pub fn deactivate(&self) {
        log::info!("ColorSpace is now deactivated");
    }
}

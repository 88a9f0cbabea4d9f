//! # Host Capabilities
//!
//! Everything the engine needs from the editor it runs in, expressed as
//! injected traits:
//!
//! - [`WorkspaceProvider`] - which folder is open right now
//! - [`SettingsStore`] - the host-owned settings sections the manager merges into
//! - [`Notifier`] - user-visible confirmations and errors
//! - [`Prompter`] - quick picks and input boxes for interactive commands
//!
//! A [`ColorSpaceContext`] bundles the capabilities once at startup and is
//! handed to [`ColorManager::new`](crate::color_manager::ColorManager::new);
//! there is no process-wide instance.

pub mod notifier;
pub mod prompter;
pub mod settings;
pub mod workspace;

pub use notifier::{LogNotifier, Notifier};
pub use prompter::{InputBoxOptions, Prompter, QuickPickItem};
pub use settings::{
    COLOR_CUSTOMIZATIONS_SECTION, COLORSPACE_SECTION, ConfigurationTarget, InMemorySettings,
    SettingsMap, SettingsStore,
};
pub use workspace::{FixedWorkspace, SharedWorkspace, WorkspaceProvider};

use crate::storage::{LogStorageListener, StorageListener};
use std::sync::Arc;

/// The capabilities a manager is built from.
#[derive(Clone)]
pub struct ColorSpaceContext {
    pub workspace: Arc<dyn WorkspaceProvider>,
    pub settings: Arc<dyn SettingsStore>,
    pub notifier: Arc<dyn Notifier>,
    pub storage_listener: Arc<dyn StorageListener>,
}

impl ColorSpaceContext {
    /// Context that reports through the `log` facade.
    pub fn new(workspace: Arc<dyn WorkspaceProvider>, settings: Arc<dyn SettingsStore>) -> Self {
        Self {
            workspace,
            settings,
            notifier: Arc::new(LogNotifier),
            storage_listener: Arc::new(LogStorageListener),
        }
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_storage_listener(mut self, listener: Arc<dyn StorageListener>) -> Self {
        self.storage_listener = listener;
        self
    }
}

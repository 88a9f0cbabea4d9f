use crate::common::ColorSpaceResult;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::Mutex;

/// A flat key/value settings section, e.g. the body of
/// `workbench.colorCustomizations`.
pub type SettingsMap = Map<String, Value>;

/// Section holding the editor chrome color overrides.
pub const COLOR_CUSTOMIZATIONS_SECTION: &str = "workbench.colorCustomizations";

/// Section holding this extension's own options.
pub const COLORSPACE_SECTION: &str = "colorspace";

/// Which settings layer an update is written to. The manager only ever
/// writes workspace settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConfigurationTarget {
    Workspace,
}

/// Host-owned settings, injected into the manager.
///
/// The manager never writes single keys: it reads a whole section, edits the
/// map and writes the whole section back. Nothing isolates that read from the
/// write, so other writers of the same section can be overwritten.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// Current contents of `section`; an unknown section is an empty map.
    async fn get(&self, section: &str) -> ColorSpaceResult<SettingsMap>;

    /// Replace the contents of `section` at `target`.
    async fn update(
        &self,
        section: &str,
        values: SettingsMap,
        target: ConfigurationTarget,
    ) -> ColorSpaceResult<()>;
}

/// Settings kept in memory, for embedding and tests.
#[derive(Debug, Default)]
pub struct InMemorySettings {
    sections: Mutex<HashMap<String, SettingsMap>>,
    updates: Mutex<Vec<(String, ConfigurationTarget)>>,
}

impl InMemorySettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a section before handing the store to a manager.
    pub fn with_section(self, section: &str, values: SettingsMap) -> Self {
        self.lock_sections().insert(section.to_string(), values);
        self
    }

    /// Snapshot of a section.
    pub fn section(&self, section: &str) -> SettingsMap {
        self.lock_sections().get(section).cloned().unwrap_or_default()
    }

    /// Every `(section, target)` written so far, oldest first.
    pub fn updates(&self) -> Vec<(String, ConfigurationTarget)> {
        match self.updates.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn lock_sections(&self) -> std::sync::MutexGuard<'_, HashMap<String, SettingsMap>> {
        match self.sections.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl SettingsStore for InMemorySettings {
    async fn get(&self, section: &str) -> ColorSpaceResult<SettingsMap> {
        Ok(self.section(section))
    }

    async fn update(
        &self,
        section: &str,
        values: SettingsMap,
        target: ConfigurationTarget,
    ) -> ColorSpaceResult<()> {
        self.lock_sections().insert(section.to_string(), values);
        match self.updates.lock() {
            Ok(mut guard) => guard.push((section.to_string(), target)),
            Err(poisoned) => poisoned.into_inner().push((section.to_string(), target)),
        }
        Ok(())
    }
}

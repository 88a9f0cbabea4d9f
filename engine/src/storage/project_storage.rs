use crate::common::{ColorSpaceError, ColorSpaceResult};
use crate::host::WorkspaceProvider;
use crate::model::{ColorScheme, ProjectConfig};
use crate::storage::events::{StorageEvent, StorageListener};
use serde::Deserialize;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;

/// Directory, relative to the workspace root, holding the document.
pub const CONFIG_DIR: &str = ".vscode";
/// File name of the per-project document.
pub const CONFIG_FILE: &str = "colorspace.json";

/// Workspace-scoped CRUD over [`ProjectConfig`], persisted in
/// `<workspace>/.vscode/colorspace.json`.
///
/// Every mutator reads the document, edits it and writes it back. There is
/// no locking: two interleaved mutators can lose one of the writes.
pub struct ProjectStorage {
    workspace: Arc<dyn WorkspaceProvider>,
    listener: Arc<dyn StorageListener>,
}

impl ProjectStorage {
    pub fn new(workspace: Arc<dyn WorkspaceProvider>, listener: Arc<dyn StorageListener>) -> Self {
        Self {
            workspace,
            listener,
        }
    }

    /// Document path for the workspace bound right now.
    pub fn config_path(&self) -> Option<PathBuf> {
        self.workspace
            .root()
            .map(|root| root.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    async fn ensure_config_dir(&self, config_path: &Path) -> ColorSpaceResult<()> {
        let Some(dir) = config_path.parent() else {
            return Ok(());
        };

        if !fs::try_exists(dir).await.unwrap_or(false) {
            fs::create_dir_all(dir)
                .await
                .map_err(|e| ColorSpaceError::io(dir, e))?;
        }
        Ok(())
    }

    /// Load the document. Never fails: a missing, unreadable or malformed
    /// document yields the empty configuration, and entries that do not
    /// decode as a [`ColorScheme`] are skipped one by one.
    pub async fn read_config(&self) -> ProjectConfig {
        let Some(path) = self.config_path() else {
            return ProjectConfig::default();
        };

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return ProjectConfig::default(),
            Err(e) => {
                self.listener.on_event(&StorageEvent::DocumentUnreadable {
                    path,
                    reason: e.to_string(),
                });
                return ProjectConfig::default();
            }
        };

        let document = match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(document)) => document,
            Ok(other) => {
                self.listener.on_event(&StorageEvent::DocumentMalformed {
                    path,
                    reason: format!("expected a JSON object, found {}", json_kind(&other)),
                });
                return ProjectConfig::default();
            }
            Err(e) => {
                self.listener.on_event(&StorageEvent::DocumentMalformed {
                    path,
                    reason: e.to_string(),
                });
                return ProjectConfig::default();
            }
        };

        let current_color = match document.get("currentColor") {
            None | Some(Value::Null) => None,
            Some(value) => self.decode_scheme(&path, "currentColor", value),
        };

        let custom_colors = match document.get("customColors") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .filter(|(_, value)| !value.is_null())
                .filter_map(|(i, value)| {
                    self.decode_scheme(&path, &format!("customColors[{i}]"), value)
                })
                .collect(),
            Some(other) => {
                self.listener.on_event(&StorageEvent::EntryDiscarded {
                    path: path.clone(),
                    entry: "customColors".to_string(),
                    reason: format!("expected an array, found {}", json_kind(other)),
                });
                Vec::new()
            }
        };

        ProjectConfig {
            current_color,
            custom_colors,
        }
    }

    fn decode_scheme(&self, path: &Path, entry: &str, value: &Value) -> Option<ColorScheme> {
        match ColorScheme::deserialize(value) {
            Ok(scheme) => Some(scheme),
            Err(e) => {
                self.listener.on_event(&StorageEvent::EntryDiscarded {
                    path: path.to_path_buf(),
                    entry: entry.to_string(),
                    reason: e.to_string(),
                });
                None
            }
        }
    }

    /// Persist `config` as 2-space indented JSON.
    pub async fn write_config(&self, config: &ProjectConfig) -> ColorSpaceResult<()> {
        let path = self.config_path().ok_or(ColorSpaceError::NoWorkspace)?;
        self.ensure_config_dir(&path).await?;

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&path, content)
            .await
            .map_err(|e| ColorSpaceError::io(&path, e))?;

        self.listener.on_event(&StorageEvent::DocumentWritten { path });
        Ok(())
    }

    pub async fn get_current_color(&self) -> Option<ColorScheme> {
        self.read_config().await.current_color
    }

    pub async fn set_current_color(&self, scheme: &ColorScheme) -> ColorSpaceResult<()> {
        let mut config = self.read_config().await;
        config.current_color = Some(scheme.clone());
        self.write_config(&config).await
    }

    pub async fn get_custom_colors(&self) -> Vec<ColorScheme> {
        self.read_config().await.custom_colors
    }

    pub async fn add_custom_color(&self, scheme: &ColorScheme) -> ColorSpaceResult<()> {
        let mut config = self.read_config().await;
        config.custom_colors.push(scheme.clone());
        self.write_config(&config).await
    }

    pub async fn update_custom_color(
        &self,
        index: usize,
        scheme: &ColorScheme,
    ) -> ColorSpaceResult<()> {
        let mut config = self.read_config().await;
        let len = config.custom_colors.len();
        let slot = config
            .custom_colors
            .get_mut(index)
            .ok_or(ColorSpaceError::InvalidIndex { index, len })?;

        *slot = scheme.clone();
        self.write_config(&config).await
    }

    /// Remove the entry at `index`; later entries move down by one.
    pub async fn delete_custom_color(&self, index: usize) -> ColorSpaceResult<ColorScheme> {
        let mut config = self.read_config().await;
        let len = config.custom_colors.len();
        if index >= len {
            return Err(ColorSpaceError::InvalidIndex { index, len });
        }

        let removed = config.custom_colors.remove(index);
        self.write_config(&config).await?;
        Ok(removed)
    }

    /// Delete the document. No-op without a workspace or document.
    pub async fn reset(&self) {
        let Some(path) = self.config_path() else {
            return;
        };

        match fs::remove_file(&path).await {
            Ok(()) => self.listener.on_event(&StorageEvent::DocumentRemoved { path }),
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => log::warn!("Failed to remove {}: {e}", path.display()),
        }
    }

    pub async fn has_config(&self) -> bool {
        match self.config_path() {
            Some(path) => fs::try_exists(&path).await.unwrap_or(false),
            None => false,
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

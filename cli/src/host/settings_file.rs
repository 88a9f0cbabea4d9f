use async_trait::async_trait;
use engine::ColorSpaceError;
use engine::common::ColorSpaceResult;
use engine::host::{ConfigurationTarget, SettingsMap, SettingsStore};
use serde_json::Value;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Host settings backed by a VS Code style `settings.json`.
///
/// The document is a flat object whose keys are dotted setting names. A
/// section is read from the object stored under its exact name merged with
/// every `section.`-prefixed key, so both of these are the `colorspace`
/// section `{"autoColor": false}`:
///
/// ```text
/// {"colorspace": {"autoColor": false}}
/// {"colorspace.autoColor": false}
/// ```
///
/// Writes store the section under its exact name and leave every other key
/// of the document untouched. A document that is not a JSON object is never
/// overwritten.
pub struct JsonFileSettings {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileSettings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> ColorSpaceResult<SettingsMap> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(SettingsMap::new()),
            Err(e) => return Err(ColorSpaceError::io(&self.path, e)),
        };

        if content.trim().is_empty() {
            return Ok(SettingsMap::new());
        }

        match serde_json::from_str::<Value>(&content) {
            Ok(Value::Object(document)) => Ok(document),
            Ok(_) => Err(ColorSpaceError::Settings(format!(
                "{} is not a JSON object",
                self.path.display()
            ))),
            Err(e) => Err(ColorSpaceError::Settings(format!(
                "Cannot parse {}: {e}",
                self.path.display()
            ))),
        }
    }

    async fn write_document(&self, document: &SettingsMap) -> ColorSpaceResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ColorSpaceError::io(parent, e))?;
        }
        let mut content = serde_json::to_string_pretty(document)?;
        content.push('\n');
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| ColorSpaceError::io(&self.path, e))
    }
}

/// Collect `section` out of a flat settings document.
fn extract_section(document: &SettingsMap, section: &str) -> SettingsMap {
    let mut values = match document.get(section) {
        Some(Value::Object(map)) => map.clone(),
        _ => SettingsMap::new(),
    };

    let prefix = format!("{section}.");
    for (key, value) in document {
        if let Some(name) = key.strip_prefix(&prefix) {
            values.insert(name.to_string(), value.clone());
        }
    }
    values
}

#[async_trait]
impl SettingsStore for JsonFileSettings {
    async fn get(&self, section: &str) -> ColorSpaceResult<SettingsMap> {
        let document = self.read_document().await?;
        Ok(extract_section(&document, section))
    }

    async fn update(
        &self,
        section: &str,
        values: SettingsMap,
        _target: ConfigurationTarget,
    ) -> ColorSpaceResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?;

        // Prefixed keys are folded into the section object
        let prefix = format!("{section}.");
        document.retain(|key, _| !key.starts_with(&prefix));
        document.insert(section.to_string(), Value::Object(values));

        log::debug!("Writing {section} to {}", self.path.display());
        self.write_document(&document).await
    }
}

use std::path::PathBuf;
use std::sync::Mutex;

/// Observable things that happen to the project document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageEvent {
    /// The document exists but could not be read; treated as empty.
    DocumentUnreadable { path: PathBuf, reason: String },
    /// The document is not a JSON object; treated as empty.
    DocumentMalformed { path: PathBuf, reason: String },
    /// One entry of an otherwise readable document was skipped.
    EntryDiscarded {
        path: PathBuf,
        entry: String,
        reason: String,
    },
    DocumentWritten { path: PathBuf },
    DocumentRemoved { path: PathBuf },
}

impl StorageEvent {
    /// Whether the store fell back to an empty configuration.
    pub fn is_corruption(&self) -> bool {
        matches!(
            self,
            StorageEvent::DocumentUnreadable { .. } | StorageEvent::DocumentMalformed { .. }
        )
    }
}

/// Hook notified of every [`StorageEvent`].
pub trait StorageListener: Send + Sync {
    fn on_event(&self, event: &StorageEvent);
}

/// Writes storage events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogStorageListener;

impl StorageListener for LogStorageListener {
    fn on_event(&self, event: &StorageEvent) {
        match event {
            StorageEvent::DocumentUnreadable { path, reason } => {
                log::warn!(
                    "Ignoring unreadable color config {}: {reason}",
                    path.display()
                );
            }
            StorageEvent::DocumentMalformed { path, reason } => {
                log::warn!(
                    "Ignoring malformed color config {}: {reason}",
                    path.display()
                );
            }
            StorageEvent::EntryDiscarded {
                path,
                entry,
                reason,
            } => {
                log::warn!("Skipping {entry} in {}: {reason}", path.display());
            }
            StorageEvent::DocumentWritten { path } => {
                log::debug!("Wrote color config {}", path.display());
            }
            StorageEvent::DocumentRemoved { path } => {
                log::debug!("Removed color config {}", path.display());
            }
        }
    }
}

/// Keeps every event in memory and forwards it to the log.
#[derive(Debug, Default)]
pub struct RecordingStorageListener {
    events: Mutex<Vec<StorageEvent>>,
}

impl RecordingStorageListener {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<StorageEvent> {
        match self.events.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn corruption_count(&self) -> usize {
        self.events().iter().filter(|e| e.is_corruption()).count()
    }
}

impl StorageListener for RecordingStorageListener {
    fn on_event(&self, event: &StorageEvent) {
        LogStorageListener.on_event(event);
        match self.events.lock() {
            Ok(mut guard) => guard.push(event.clone()),
            Err(poisoned) => poisoned.into_inner().push(event.clone()),
        }
    }
}

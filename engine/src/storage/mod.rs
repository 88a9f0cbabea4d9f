//! # Project Storage
//!
//! Durable per-workspace persistence of the selected scheme and the user's
//! custom schemes, in a JSON document next to the workspace:
//!
//! ```text
//! <workspace>/.vscode/colorspace.json
//! {
//!   "currentColor": { ... },
//!   "customColors": [ ... ]
//! }
//! ```
//!
//! The document path is re-resolved from the [`WorkspaceProvider`] on every
//! call. A document that cannot be read or parsed is treated as absent; the
//! [`StorageListener`] hook is the only place that learns about it.
//!
//! [`WorkspaceProvider`]: crate::host::WorkspaceProvider

pub mod events;
pub mod project_storage;

pub use events::{LogStorageListener, RecordingStorageListener, StorageEvent, StorageListener};
pub use project_storage::{CONFIG_DIR, CONFIG_FILE, ProjectStorage};

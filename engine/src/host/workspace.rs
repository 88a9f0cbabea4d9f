use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

/// Resolves the workspace folder currently bound to the host.
///
/// Called on every store operation, so a host can switch folders between
/// calls without re-creating the store.
pub trait WorkspaceProvider: Send + Sync {
    /// Root of the first workspace folder, or `None` when nothing is open.
    fn root(&self) -> Option<PathBuf>;
}

/// A workspace binding that never changes.
#[derive(Debug, Clone, Default)]
pub struct FixedWorkspace {
    root: Option<PathBuf>,
}

impl FixedWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: Some(root.into()),
        }
    }

    /// A host with no folder open.
    pub fn none() -> Self {
        Self { root: None }
    }
}

impl WorkspaceProvider for FixedWorkspace {
    fn root(&self) -> Option<PathBuf> {
        self.root.clone()
    }
}

/// A workspace binding that can be switched while the manager is running.
#[derive(Debug, Clone, Default)]
pub struct SharedWorkspace {
    root: Arc<RwLock<Option<PathBuf>>>,
}

impl SharedWorkspace {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self {
            root: Arc::new(RwLock::new(root)),
        }
    }

    /// Bind a new folder, or unbind with `None`.
    pub fn set_root(&self, root: Option<&Path>) {
        match self.root.write() {
            Ok(mut guard) => *guard = root.map(Path::to_path_buf),
            Err(poisoned) => *poisoned.into_inner() = root.map(Path::to_path_buf),
        }
        log::debug!("Workspace root changed to {root:?}");
    }
}

impl WorkspaceProvider for SharedWorkspace {
    fn root(&self) -> Option<PathBuf> {
        match self.root.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

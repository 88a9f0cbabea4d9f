use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the engine.
pub type ColorSpaceResult<T> = Result<T, ColorSpaceError>;

/// Errors surfaced by the store, the manager and the host capabilities.
///
/// A malformed or unreadable project document is deliberately absent from
/// this list: the store treats it as "no configuration" and reports it only
/// through a [`StorageEvent`](crate::storage::StorageEvent).
///
/// # Error Categories
///
/// ## Workspace Errors
/// - [`NoWorkspace`] - no workspace folder is bound; callers report it to the
///   user and stop without changing state
///
/// ## Custom Color Errors
/// - [`InvalidIndex`] - update/delete addressed a position outside
///   `[0, len)`; the stored list is left untouched
/// - [`InvalidScheme`] - a user-entered scheme failed validation
///
/// ## Persistence and Host Errors
/// - [`Io`] - creating the document directory or writing the document failed
/// - [`Serialization`] - the document could not be encoded
/// - [`Settings`] - the host settings capability rejected a read or write
/// - [`View`] - the panel view could not be written to
///
/// # Examples
///
/// ```no_run
/// use engine::common::ColorSpaceError;
///
/// fn describe(error: &ColorSpaceError) -> String {
///     match error {
///         ColorSpaceError::InvalidIndex { index, len } => {
///             format!("There is no custom color #{index} (only {len} defined)")
///         }
///         other => other.user_message(),
///     }
/// }
/// ```
///
/// [`NoWorkspace`]: ColorSpaceError::NoWorkspace
/// [`InvalidIndex`]: ColorSpaceError::InvalidIndex
/// [`InvalidScheme`]: ColorSpaceError::InvalidScheme
/// [`Io`]: ColorSpaceError::Io
/// [`Serialization`]: ColorSpaceError::Serialization
/// [`Settings`]: ColorSpaceError::Settings
/// [`View`]: ColorSpaceError::View
#[derive(Debug, Error)]
pub enum ColorSpaceError {
    /// No workspace folder is bound to the host.
    #[error("No workspace folder is open")]
    NoWorkspace,

    /// Custom color index outside `[0, len)`.
    #[error("Invalid custom color index {index} (custom colors: {len})")]
    InvalidIndex { index: usize, len: usize },

    /// Filesystem failure while persisting the project document.
    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The project document could not be serialized.
    #[error("Failed to serialize color configuration: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The host settings capability failed.
    #[error("Settings error: {0}")]
    Settings(String),

    /// A scheme failed validation.
    #[error("Invalid color scheme: {0}")]
    InvalidScheme(String),

    /// The panel view could not be reached.
    #[error("Panel view error: {0}")]
    View(String),
}

impl ColorSpaceError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ColorSpaceError::Io {
            path: path.into(),
            source,
        }
    }

    /// Message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ColorSpaceError::NoWorkspace => "No workspace folder is open".to_string(),
            ColorSpaceError::InvalidIndex { index, len } => {
                format!("Custom color #{index} does not exist ({len} custom colors defined)")
            }
            ColorSpaceError::Io { path, source } => {
                format!("Could not write {}: {source}", path.display())
            }
            ColorSpaceError::Serialization(e) => format!("Could not encode colors: {e}"),
            ColorSpaceError::Settings(msg) => format!("Could not update settings: {msg}"),
            ColorSpaceError::InvalidScheme(msg) => msg.clone(),
            ColorSpaceError::View(msg) => format!("Could not update the color panel: {msg}"),
        }
    }

    pub fn is_no_workspace(&self) -> bool {
        matches!(self, ColorSpaceError::NoWorkspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_index_display() {
        let error = ColorSpaceError::InvalidIndex { index: 5, len: 2 };
        assert_eq!(
            error.to_string(),
            "Invalid custom color index 5 (custom colors: 2)"
        );
    }

    #[test]
    fn test_io_error_keeps_path() {
        let error = ColorSpaceError::io(
            "/tmp/ws/.vscode/colorspace.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(error.to_string().contains("/tmp/ws/.vscode/colorspace.json"));
        assert!(error.user_message().contains("denied"));
    }

    #[test]
    fn test_no_workspace_message() {
        assert!(ColorSpaceError::NoWorkspace.is_no_workspace());
        assert_eq!(
            ColorSpaceError::NoWorkspace.user_message(),
            "No workspace folder is open"
        );
    }
}

use engine::ColorSpaceError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors of the command line front end.
///
/// Engine failures are carried unchanged in [`AppError::Engine`]; the other
/// variants cover what only the binary does: loading configuration,
/// resolving the workspace, and talking to the terminal.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration loading and validation errors.
    #[error("Configuration Error: {0}")]
    Config(String),

    /// The `--workspace` directory could not be resolved.
    #[error("Workspace Error: {}: {source}", path.display())]
    Workspace {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Arguments that parse but make no sense, e.g. an update with nothing to change.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Engine(#[from] ColorSpaceError),

    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Text shown to the user on exit.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Engine(error) => error.user_message(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

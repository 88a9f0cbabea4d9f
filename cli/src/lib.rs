//! # ColorSpace CLI Library
//!
//! Command line front end for the ColorSpace engine: each invocation binds
//! one workspace folder, reads and writes its `.vscode/settings.json`, and
//! runs one subcommand. `colorspace panel` turns the process into a
//! JSON-lines host for the color panel protocol.
//!
//! ## Modules
//!
//! - [`app`] - Subcommand dispatch and workspace wiring
//! - [`cli`] - Argument definitions
//! - [`config`] - Configuration loading (`config.toml` plus environment)
//! - [`constants`] - File names and environment variable naming
//! - [`error`] - Error types of the front end
//! - [`host`] - Terminal implementations of the engine's host capabilities
//! - [`logger`] - Logging setup
//!
//! This library interface enables integration testing by providing access to internal modules.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod logger;

pub use error::{AppError, AppResult};

//! # Terminal Host
//!
//! Implementations of the engine's host capabilities for a command line
//! session: settings in a `settings.json` file, prompts and notifications on
//! the terminal, and the panel as a JSON-lines stream.

pub mod notifier;
pub mod panel_bridge;
pub mod prompter;
pub mod settings_file;

pub use notifier::ConsoleNotifier;
pub use panel_bridge::{JsonLinesView, run_panel_bridge};
pub use prompter::LinePrompter;
pub use settings_file::JsonFileSettings;

//! # ColorSpace Engine
//!
//! Per-workspace editor chrome colors: a fixed palette, a JSON store next to
//! the workspace for the selected and user-defined schemes, and a manager
//! that merges the selection into the host's settings without touching
//! unrelated keys.
//!
//! ## Modules
//!
//! - [`model`] - Color scheme and project config types, plus scheme validation
//! - [`palette`] - The twelve built-in schemes
//! - [`storage`] - `.vscode/colorspace.json` persistence and storage events
//! - [`color_manager`] - Selection, auto-assignment, apply and reset
//! - [`host`] - Injected host capabilities (workspace, settings, notifications, prompts)
//! - [`commands`] - Command surface exposed to the host
//! - [`panel`] - Message protocol of the color panel
//! - [`extension`] - Activation and workspace-change wiring
//! - [`common`] - Error types
//! - [`validation`] - The `Validator` trait

pub mod color_manager;
pub mod commands;
pub mod common;
pub mod extension;
pub mod host;
pub mod model;
pub mod palette;
pub mod panel;
pub mod storage;
pub mod validation;

pub use color_manager::ColorManager;
pub use common::{ColorSpaceError, ColorSpaceResult};
pub use extension::Extension;
pub use validation::Validator;

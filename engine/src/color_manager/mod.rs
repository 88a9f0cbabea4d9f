//! # Color Manager
//!
//! Orchestrates selecting a scheme for the workspace, persisting it through
//! [`ProjectStorage`](crate::storage::ProjectStorage), and applying it to the
//! host's `workbench.colorCustomizations` section.
//!
//! ## Applying and Resetting
//!
//! Applying is a non-destructive merge: the whole section is read, only the
//! keys of the enabled regions are written, and the section is written back.
//! Resetting removes exactly the nine keys in
//! [`COLOR_CUSTOMIZATION_KEYS`](customizations::COLOR_CUSTOMIZATION_KEYS).
//!
//! ```no_run
//! use engine::color_manager::ColorManager;
//! use engine::host::{ColorSpaceContext, FixedWorkspace, InMemorySettings};
//! use std::sync::Arc;
//!
//! # async fn run() -> engine::common::ColorSpaceResult<()> {
//! let context = ColorSpaceContext::new(
//!     Arc::new(FixedWorkspace::new("/projects/app")),
//!     Arc::new(InMemorySettings::new()),
//! );
//! let manager = ColorManager::new(context);
//!
//! manager.auto_assign_color().await?;
//! manager.reset_color().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Options
//!
//! `colorspace.autoColor` gates automatic assignment and
//! `colorspace.colorElements` selects the regions; see [`ColorSpaceOptions`].

pub mod customizations;
pub mod manager;
pub mod options;

pub use customizations::COLOR_CUSTOMIZATION_KEYS;
pub use manager::ColorManager;
pub use options::{ColorElements, ColorSpaceOptions};

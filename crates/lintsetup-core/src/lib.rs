//! Lintsetup Core - library for bootstrapping ESLint and Prettier
//!
//! This library provides the pieces of the `lintsetup` CLI: package
//! manager detection, install command construction, bundled config
//! template materialization, package.json updates, and the linear setup
//! workflow tying them together.
//!
//! # Architecture
//!
//! - **Core operations** - detection, command building, file and manifest
//!   mutation; plain functions, no terminal involved
//! - **Workflow** - [`workflow::run_setup`] drives the steps against a
//!   [`workflow::SetupPrompter`], so prompts can be scripted in tests
//! - **TUI** - optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module

pub mod manifest;
pub mod pm;
pub mod templates;
pub mod workflow;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use pm::PackageManager;
pub use templates::ConfigTemplate;
pub use workflow::{run_setup, SetupOutcome, SetupPrompter, SetupReport};

#[cfg(feature = "tui")]
pub use tui::run;

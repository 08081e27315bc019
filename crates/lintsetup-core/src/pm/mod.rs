//! Package manager detection and dependency installation
//!
//! This module provides:
//! - Detection of the project's Node package manager
//! - Install command construction for the fixed dev-dependency set
//! - Execution of the install command

pub mod detect;
pub mod install;

pub use detect::PackageManager;
pub use install::{run_install, DEV_DEPENDENCIES};

//! Charm-style interactive layer built on cliclack
//!
//! Feature-gated behind `tui` so the workflow and its building blocks can
//! be used without a terminal.

mod prompts;

pub use prompts::{run, CliPrompter};

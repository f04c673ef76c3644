//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the reelsmith binary.

mod commands;
mod platforms;
mod run;

pub use commands::{Cli, Commands, RunArgs};
pub use platforms::list_platforms;
pub use run::run_pipeline;

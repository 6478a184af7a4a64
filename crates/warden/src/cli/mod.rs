//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the warden binary.

mod check_config;
mod commands;
mod simulate;

pub use check_config::check_config;
pub use commands::{Cli, Commands};
pub use simulate::run_simulation;

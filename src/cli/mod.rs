//! CLI module
//!
//! Provides command-line interface for:
//! - init: create the database schema and seed the default categories
//! - start: boot the HTTP server and serve until interrupted

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, run, run_command, start, Config};
pub use errors::{CliError, CliErrorCode, CliResult};

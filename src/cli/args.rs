//! CLI argument definitions using clap
//!
//! Commands:
//! - triviad init --config <path>
//! - triviad start --config <path> [--port <port>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// triviad - HTTP API for a trivia question bank and quiz player
#[derive(Parser, Debug)]
#[command(name = "triviad")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the database schema and seed the default categories
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./triviad.json")]
        config: PathBuf,
    },

    /// Start the trivia API server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./triviad.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

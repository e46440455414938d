//! CLI argument definitions using clap
//!
//! Commands:
//! - shelfdb init --config <path>
//! - shelfdb start --config <path> [--port N]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// shelfdb - A small, self-hostable book catalog service
#[derive(Parser, Debug)]
#[command(name = "shelfdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize the data directory and an empty store
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./shelfdb.json")]
        config: PathBuf,
    },

    /// Start the shelfdb server
    Start {
        /// Path to configuration file
        #[arg(long, default_value = "./shelfdb.json")]
        config: PathBuf,

        /// Override the configured HTTP port
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

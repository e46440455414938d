//! Command-line interface for shelfdb
//!
//! Commands:
//! - `shelfdb init --config <path>` - create the data directory and an
//!   empty store
//! - `shelfdb start --config <path> [--port N]` - start the HTTP server

pub mod args;
pub mod commands;
pub mod errors;

pub use args::{Cli, Command};
pub use commands::{run, Config};
pub use errors::{CliError, CliResult};

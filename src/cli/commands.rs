//! CLI command implementations
//!
//! `init` creates the data directory and an empty store and exits; `start`
//! requires an initialized store, wires up logging, and runs the HTTP
//! server until interrupted.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::catalog::Catalog;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::FileStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Name of the collection file inside the data directory
const STORE_FILE: &str = "books.json";

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Data directory (required)
    pub data_dir: String,

    /// HTTP server settings (optional, defaults field-by-field)
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration
    fn validate(&self) -> CliResult<()> {
        if self.data_dir.is_empty() {
            return Err(CliError::config_error("data_dir must not be empty"));
        }
        if self.http.port == 0 {
            return Err(CliError::config_error("http.port must be > 0"));
        }
        Ok(())
    }

    /// Path to the collection file
    pub fn store_path(&self) -> PathBuf {
        Path::new(&self.data_dir).join(STORE_FILE)
    }
}

/// Parse CLI arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Start { config, port } => start(&config, port),
    }
}

/// Initialize the data directory and an empty store
///
/// Creates the directory structure and writes an empty collection. Does NOT
/// start the server.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = FileStore::open(config.store_path());

    if store.exists() {
        return Err(CliError::AlreadyInitialized);
    }

    store.initialize()?;

    println!("Initialized empty store at {}", store.path().display());
    Ok(())
}

/// Start the shelfdb server
///
/// Port resolution: `--port` flag, then the `PORT` environment variable,
/// then the config file.
pub fn start(config_path: &Path, port_flag: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let store = FileStore::open(config.store_path());

    if !store.exists() {
        return Err(CliError::NotInitialized);
    }

    init_tracing();

    let mut http_config = config.http.clone();
    if let Some(port) = port_flag.or_else(port_from_env) {
        http_config.port = port;
    }

    let catalog = Catalog::new(store);
    let server = HttpServer::with_config(http_config, catalog);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Read a port override from the PORT environment variable
fn port_from_env() -> Option<u16> {
    std::env::var("PORT").ok()?.parse().ok()
}

/// Install the global tracing subscriber
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("shelfdb=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join("shelfdb.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_config_load_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"data_dir": "./data"}"#);

        let config = Config::load(&path).unwrap();
        assert_eq!(config.data_dir, "./data");
        assert_eq!(config.http.port, 3000);
    }

    #[test]
    fn test_config_rejects_missing_data_dir() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"http": {"port": 8080}}"#);

        assert!(matches!(Config::load(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_config_rejects_zero_port() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"data_dir": "./data", "http": {"port": 0}}"#);

        assert!(matches!(Config::load(&path), Err(CliError::Config(_))));
    }

    #[test]
    fn test_store_path_joins_data_dir() {
        let config: Config = serde_json::from_str(r#"{"data_dir": "/var/lib/shelfdb"}"#).unwrap();
        assert_eq!(
            config.store_path(),
            Path::new("/var/lib/shelfdb/books.json")
        );
    }

    #[test]
    fn test_init_then_reinit_fails() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");
        let path = write_config(
            &dir,
            &format!(r#"{{"data_dir": {:?}}}"#, data_dir.to_string_lossy()),
        );

        init(&path).unwrap();
        assert!(data_dir.join("books.json").exists());

        assert!(matches!(init(&path), Err(CliError::AlreadyInitialized)));
    }

    #[test]
    fn test_start_requires_initialized_store() {
        let dir = TempDir::new().unwrap();
        let data_dir = dir.path().join("data");
        let path = write_config(
            &dir,
            &format!(r#"{{"data_dir": {:?}}}"#, data_dir.to_string_lossy()),
        );

        assert!(matches!(
            start(&path, None),
            Err(CliError::NotInitialized)
        ));
    }
}

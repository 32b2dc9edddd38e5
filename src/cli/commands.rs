//! CLI command implementations
//!
//! `init` prepares the database (schema plus seed categories) without
//! starting a server; `start` verifies the database and enters the
//! serving loop.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;
use crate::store::SqliteStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Database URL (default: "sqlite://trivia.db")
    #[serde(default = "default_database_url")]
    pub database_url: String,

    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_database_url() -> String {
    "sqlite://trivia.db".to_string()
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            host: default_host(),
            port: default_port(),
        }
    }
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
        if self.database_url.is_empty() {
            return Err(CliError::config_error("database_url must not be empty"));
        }

        if self.port == 0 {
            return Err(CliError::config_error("port must be > 0"));
        }

        Ok(())
    }

    /// Server-facing slice of the configuration
    pub fn server_config(&self) -> HttpServerConfig {
        HttpServerConfig {
            host: self.host.clone(),
            port: self.port,
        }
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
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

/// Create the database schema and seed the default categories
///
/// Does NOT start a server. Refuses to run against an already
/// initialized database.
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let rt = runtime()?;
    rt.block_on(async {
        let store = SqliteStore::connect(&config.database_url).await?;

        if store.is_initialized().await? {
            return Err(CliError::already_initialized());
        }

        store.init_schema().await?;
        store.seed_default_categories().await?;
        store.close().await;

        Logger::info(
            "DATABASE_INITIALIZED",
            &[("database_url", &config.database_url)],
        );

        Ok(())
    })
}

/// Start the trivia API server
///
/// Boot sequence: load config, open the database, verify the schema
/// exists, then serve until interrupted.
pub fn start(config_path: &Path, port_override: Option<u16>) -> CliResult<()> {
    let mut config = Config::load(config_path)?;
    if let Some(port) = port_override {
        config.port = port;
    }

    let rt = runtime()?;
    rt.block_on(async {
        let store = SqliteStore::connect(&config.database_url).await?;

        if !store.is_initialized().await? {
            return Err(CliError::not_initialized());
        }

        let server = HttpServer::with_config(config.server_config(), Arc::new(store));
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

fn runtime() -> CliResult<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::super::errors::CliErrorCode;
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn create_config(temp_dir: &TempDir) -> std::path::PathBuf {
        let config_path = temp_dir.path().join("triviad.json");
        let db_path = temp_dir.path().join("trivia.db");

        let config = json!({
            "database_url": format!("sqlite://{}", db_path.display())
        });

        fs::write(&config_path, config.to_string()).unwrap();
        config_path
    }

    #[test]
    fn test_init_creates_database() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        init(&config_path).unwrap();

        assert!(temp_dir.path().join("trivia.db").exists());
    }

    #[test]
    fn test_init_refuses_reinit() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        init(&config_path).unwrap();

        let result = init(&config_path);
        assert!(result.is_err());
        assert_eq!(
            result.unwrap_err().code(),
            &CliErrorCode::AlreadyInitialized
        );
    }

    #[test]
    fn test_start_requires_init() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = create_config(&temp_dir);

        let result = start(&config_path, None);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::NotInitialized);
    }

    #[test]
    fn test_config_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("triviad.json");

        fs::write(&config_path, "{}").unwrap();

        let config = Config::load(&config_path).unwrap();
        assert_eq!(config.database_url, "sqlite://trivia.db");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn test_config_validates_port() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("triviad.json");

        fs::write(&config_path, json!({"port": 0}).to_string()).unwrap();

        let result = Config::load(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_config_requires_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("missing.json");

        let result = Config::load(&config_path);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().code(), &CliErrorCode::ConfigError);
    }
}

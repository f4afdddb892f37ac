//! Configuration management for the Smart Field server
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with SF_ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::Deserialize;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Upstream agronomic data service configuration
    pub upstream: UpstreamConfig,

    /// Local storage configuration
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct UpstreamConfig {
    /// Base URL of the upstream agronomic API
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct StorageConfig {
    /// Path of the JSON file holding persisted field data.
    /// Defaults to the platform data directory when unset.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl StorageConfig {
    /// Resolve the data file path, falling back to the platform data dir
    pub fn resolve_data_file(&self) -> Result<PathBuf, ConfigError> {
        if let Some(path) = &self.data_file {
            return Ok(path.clone());
        }

        let dirs = ProjectDirs::from("", "", "smart-field").ok_or_else(|| {
            ConfigError::Message("could not determine a platform data directory".to_string())
        })?;
        Ok(dirs.data_dir().join("fields.json"))
    }
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("SF_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("upstream.base_url", "http://localhost:5000/api")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (SF_ prefix)
            .add_source(
                Environment::with_prefix("SF")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

//! Configuration management for the contact registry.
//!
//! This module handles loading and validating configuration from environment
//! variables, after picking up a `.env` file if one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::net::SocketAddr;

const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017/";
const DEFAULT_DATABASE: &str = "contact_app";
const DEFAULT_COLLECTION: &str = "contacts";
const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Configuration for the contact registry server.
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongodb_uri: String,

    /// Database holding the contacts collection (default: "contact_app")
    pub database: String,

    /// Collection holding one document per contact (default: "contacts")
    pub collection: String,

    /// Address the HTTP server listens on (default: 127.0.0.1:5000)
    pub bind_address: SocketAddr,

    /// Log level used when RUST_LOG is unset (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `MONGODB_URI`: connection string (default: `mongodb://localhost:27017/`)
    /// - `MONGODB_DATABASE`: database name (default: `contact_app`)
    /// - `MONGODB_COLLECTION`: collection name (default: `contacts`)
    /// - `BIND_ADDRESS`: listen address (default: `127.0.0.1:5000`)
    /// - `LOG_LEVEL`: logging level (default: `info`)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let mongodb_uri =
            env::var("MONGODB_URI").unwrap_or_else(|_| DEFAULT_MONGODB_URI.to_string());
        if !mongodb_uri.starts_with("mongodb://") && !mongodb_uri.starts_with("mongodb+srv://") {
            return Err(ConfigError::InvalidValue {
                var: "MONGODB_URI".to_string(),
                reason: "Must start with mongodb:// or mongodb+srv://".to_string(),
            });
        }

        let database = Self::parse_env_name("MONGODB_DATABASE", DEFAULT_DATABASE)?;
        let collection = Self::parse_env_name("MONGODB_COLLECTION", DEFAULT_COLLECTION)?;
        let bind_address = Self::parse_env_addr("BIND_ADDRESS", DEFAULT_BIND_ADDRESS)?;

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            mongodb_uri,
            database,
            collection,
            bind_address,
            log_level,
        })
    }

    /// Read a database/collection name, rejecting blank values.
    fn parse_env_name(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) if val.trim().is_empty() => Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            }),
            Ok(val) => Ok(val),
            Err(_) => Ok(default.to_string()),
        }
    }

    /// Parse an environment variable as a socket address with a default value.
    fn parse_env_addr(var_name: &str, default: &str) -> ConfigResult<SocketAddr> {
        let raw = env::var(var_name).unwrap_or_else(|_| default.to_string());
        raw.parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a socket address like 127.0.0.1:5000, got: {}", raw),
            })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database: DEFAULT_DATABASE.to_string(),
            collection: DEFAULT_COLLECTION.to_string(),
            bind_address: SocketAddr::from(([127, 0, 0, 1], 5000)),
            log_level: "info".to_string(),
        }
    }
}

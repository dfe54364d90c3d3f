//! Server configuration loaded from the environment.
//!
//! # Environment Variables
//!
//! - `HOST`: bind address (optional, default: `127.0.0.1`)
//! - `PORT`: listen port (optional, default: `3000`)
//!
//! A `.env` file in the working directory is read first if present.

use std::env;

use thiserror::Error;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `PORT` is set but is not a valid
    /// port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    key: "PORT".to_string(),
                    message: e.to_string(),
                }
            })?,
            None => DEFAULT_PORT,
        };
        Ok(Self { host, port })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

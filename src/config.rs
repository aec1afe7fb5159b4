//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::error::{CacheError, Result};

/// Server configuration parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entities held in memory
    pub max_size: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MAX_SIZE` - Cache capacity, must be a positive integer (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    ///
    /// # Errors
    /// `CacheError::InvalidConfig` if `MAX_SIZE` is set but not a positive integer.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_size = match env::var("MAX_SIZE") {
            Ok(raw) => parse_max_size(&raw)?,
            Err(_) => defaults.max_size,
        };

        Ok(Self {
            max_size,
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_size: 1000,
            server_port: 3000,
        }
    }
}

/// Parses a capacity value, rejecting zero, negatives and garbage.
pub fn parse_max_size(raw: &str) -> Result<usize> {
    let value: i64 = raw.trim().parse().map_err(|_| {
        CacheError::InvalidConfig(format!("MAX_SIZE must be an integer, got '{}'", raw))
    })?;

    if value <= 0 {
        return Err(CacheError::InvalidConfig(format!(
            "MAX_SIZE must be greater than 0, got {}",
            value
        )));
    }

    usize::try_from(value)
        .map_err(|_| CacheError::InvalidConfig(format!("MAX_SIZE {} is too large", value)))
}

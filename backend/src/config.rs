//! Application configuration
//!
//! Centralized configuration management with environment variable support
//! and sensible defaults.

use crate::state::{StorageConfig, DEFAULT_COURSE_CAPACITY};
use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server configuration
    pub server: ServerConfig,
    /// Storage configuration
    pub storage: StorageSettings,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to bind the server to
    pub port: u16,
    /// Host address to bind to
    pub host: String,
}

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageSettings {
    /// Load the seed dataset at startup
    pub seed_on_start: bool,
    /// Seats per course; `None` disables the cap
    pub course_capacity: Option<usize>,
}

impl StorageSettings {
    /// Business rules handed to the storage engine
    pub fn storage_config(&self) -> StorageConfig {
        StorageConfig {
            course_capacity: self.course_capacity,
        }
    }
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            server: ServerConfig {
                port: lookup("PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(8080),
                host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            },
            storage: StorageSettings {
                seed_on_start: lookup("SEED_ON_START")
                    .map(|v| parse_bool(&v))
                    .unwrap_or(true),
                course_capacity: lookup("COURSE_CAPACITY")
                    .map(|v| parse_capacity(&v))
                    .unwrap_or(Some(DEFAULT_COURSE_CAPACITY)),
            },
        }
    }

    /// Get the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_bool(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

/// `unlimited` or `0` disable the cap; anything unparsable keeps the default
fn parse_capacity(value: &str) -> Option<usize> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("unlimited") {
        return None;
    }
    match value.parse::<usize>() {
        Ok(0) => None,
        Ok(capacity) => Some(capacity),
        Err(_) => {
            tracing::warn!(value, "Invalid COURSE_CAPACITY, using default");
            Some(DEFAULT_COURSE_CAPACITY)
        }
    }
}

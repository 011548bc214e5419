// Copyright (c) 2025 - Cowboy AI, Inc.

//! Service configuration
//!
//! Loaded from the process environment, with a `.env` file in the working
//! directory filling in variables the environment does not set:
//!
//! | Variable             | Default        | Meaning                                  |
//! |----------------------|----------------|------------------------------------------|
//! | `DSN`                | unset          | PostgreSQL URL; unset selects memory     |
//! | `BIND_ADDR`          | `0.0.0.0:8080` | HTTP listen address                      |
//! | `DB_MAX_CONNECTIONS` | `5`            | Pool size, must be greater than zero     |
//! | `API_PREFIX`         | `/api/v1`      | Route prefix for the todo endpoints      |

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?} ({reason})")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("failed to read env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}

/// Todo service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// PostgreSQL connection string (None selects in-memory storage)
    pub dsn: Option<String>,

    /// HTTP listen address
    pub bind_addr: String,

    /// Maximum pooled database connections
    pub max_connections: u32,

    /// Route prefix for the todo API
    pub api_prefix: String,
}

impl ServiceConfig {
    pub const DEFAULT_BIND_ADDR: &'static str = "0.0.0.0:8080";
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;
    pub const DEFAULT_API_PREFIX: &'static str = "/api/v1";

    /// Default env file, resolved against the working directory
    pub const ENV_FILE: &'static str = ".env";

    /// Load configuration from the environment and `.env`, if present
    pub fn load() -> Result<Self, ConfigError> {
        let path = Path::new(Self::ENV_FILE);
        if path.is_file() {
            Self::from_env_file(path)
        } else {
            Self::from_env()
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from an env file, overridden by the environment
    ///
    /// The process environment is left untouched.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let file = read_env_file(path.as_ref())?;
        Self::from_lookup(|name| {
            std::env::var(name)
                .ok()
                .or_else(|| file.get(name).cloned())
        })
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dsn) = lookup("DSN").filter(|v| !v.trim().is_empty()) {
            config.dsn = Some(dsn);
        }

        if let Some(bind_addr) = lookup("BIND_ADDR") {
            config.bind_addr = bind_addr;
        }

        if let Some(value) = lookup("DB_MAX_CONNECTIONS") {
            config.max_connections = parse_max_connections(&value)?;
        }

        if let Some(prefix) = lookup("API_PREFIX") {
            config.api_prefix = normalize_prefix(&prefix);
        }

        Ok(config)
    }

    /// Set the database connection string
    pub fn with_dsn(mut self, dsn: impl Into<String>) -> Self {
        self.dsn = Some(dsn.into());
        self
    }

    /// Set the listen address
    pub fn with_bind_addr(mut self, bind_addr: impl Into<String>) -> Self {
        self.bind_addr = bind_addr.into();
        self
    }

    /// Set the route prefix
    pub fn with_api_prefix(mut self, prefix: &str) -> Self {
        self.api_prefix = normalize_prefix(prefix);
        self
    }

    /// Whether a database is configured
    pub fn uses_database(&self) -> bool {
        self.dsn.is_some()
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            bind_addr: Self::DEFAULT_BIND_ADDR.to_string(),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            api_prefix: Self::DEFAULT_API_PREFIX.to_string(),
        }
    }
}

fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    let failed = |e: dotenvy::Error| ConfigError::EnvFile {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    let vars = dotenvy::from_path_iter(path)
        .map_err(failed)?
        .collect::<Result<HashMap<_, _>, _>>()
        .map_err(failed)?;
    debug!(path = %path.display(), count = vars.len(), "Read env file");
    Ok(vars)
}

fn parse_max_connections(value: &str) -> Result<u32, ConfigError> {
    let invalid = |reason: &str| ConfigError::InvalidValue {
        name: "DB_MAX_CONNECTIONS",
        value: value.to_string(),
        reason: reason.to_string(),
    };

    match value.trim().parse::<u32>() {
        Ok(0) => Err(invalid("must be greater than zero")),
        Ok(n) => Ok(n),
        Err(e) => Err(invalid(&e.to_string())),
    }
}

/// `todos/` and `/todos` both become `/todos`; empty stays empty
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

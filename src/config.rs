//! Application configuration loaded from the environment.
//!
//! A `.env` file in the working directory is read first when present; real
//! environment variables take precedence over it.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DB_HOST` | `localhost` |
//! | `DB_PORT` | `5432` |
//! | `DB_USER` | `todo_user` |
//! | `DB_PASSWORD` | `todo_password` |
//! | `DB_NAME` | `todo_db` |
//! | `SERVER_HOST` | `0.0.0.0` |
//! | `SERVER_PORT` | `8080` |
//! | `TODO_STORAGE` | `memory` |
//! | `EXPOSE_INTERNAL_ERRORS` | `false` |

use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A required value was set to an empty string.
    #[error("configuration value {0} must not be blank")]
    Blank(&'static str),
    /// A value could not be parsed.
    #[error("invalid value for {key}: {message}")]
    InvalidValue {
        /// Variable name.
        key: &'static str,
        /// Why the value was rejected.
        message: String,
    },
}

/// Persistence backend selected at start-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum StorageBackend {
    /// Process-local map; contents are lost on exit.
    #[default]
    Memory,
    /// `PostgreSQL` through a Diesel pool.
    Postgres,
}

impl StorageBackend {
    /// Returns the configuration spelling of the backend.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Memory => "memory",
            Self::Postgres => "postgres",
        }
    }
}

impl fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Server host.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Role name.
    pub user: String,
    /// Role password.
    pub password: String,
    /// Database name.
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: 5432,
            user: "todo_user".to_owned(),
            password: "todo_password".to_owned(),
            name: "todo_db".to_owned(),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Returns `host:port` for binding.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Database settings.
    pub database: DatabaseConfig,
    /// Listener settings.
    pub server: ServerConfig,
    /// Selected persistence backend.
    pub storage: StorageBackend,
    /// Whether HTTP error bodies carry internal reasons.
    pub expose_internal_errors: bool,
}

impl AppConfig {
    /// Loads configuration from `.env` and the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a database value is blank or a value
    /// fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through an arbitrary variable lookup.
    ///
    /// Unset variables fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a database value is blank or a value
    /// fails to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use todo_ddd::config::{AppConfig, StorageBackend};
    ///
    /// let config = AppConfig::from_lookup(|key| match key {
    ///     "SERVER_PORT" => Some("9090".to_owned()),
    ///     "TODO_STORAGE" => Some("postgres".to_owned()),
    ///     _ => None,
    /// })?;
    /// assert_eq!(config.server.port, 9090);
    /// assert_eq!(config.storage, StorageBackend::Postgres);
    /// # Ok::<(), todo_ddd::config::ConfigError>(())
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let database = DatabaseConfig {
            host: required(&lookup, "DB_HOST", defaults.database.host)?,
            port: parsed(&lookup, "DB_PORT", defaults.database.port)?,
            user: required(&lookup, "DB_USER", defaults.database.user)?,
            password: required(&lookup, "DB_PASSWORD", defaults.database.password)?,
            name: required(&lookup, "DB_NAME", defaults.database.name)?,
        };
        let server = ServerConfig {
            host: lookup("SERVER_HOST")
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.server.host),
            port: parsed(&lookup, "SERVER_PORT", defaults.server.port)?,
        };
        let storage = parsed(&lookup, "TODO_STORAGE", defaults.storage)?;
        let expose_internal_errors = match lookup("EXPOSE_INTERNAL_ERRORS") {
            Some(value) => parse_flag("EXPOSE_INTERNAL_ERRORS", &value)?,
            None => defaults.expose_internal_errors,
        };

        Ok(Self {
            database,
            server,
            storage,
            expose_internal_errors,
        })
    }

    /// Builds the `PostgreSQL` connection URL.
    #[must_use]
    pub fn database_url(&self) -> String {
        let DatabaseConfig {
            host,
            port,
            user,
            password,
            name,
        } = &self.database;
        format!("postgres://{user}:{password}@{host}:{port}/{name}")
    }
}

fn required<F>(lookup: &F, key: &'static str, default: String) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) if value.trim().is_empty() => Err(ConfigError::Blank(key)),
        Some(value) => Ok(value),
        None => Ok(default),
    }
}

fn parsed<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    lookup(key).map_or(Ok(default), |value| {
        value
            .trim()
            .parse()
            .map_err(|err: T::Err| ConfigError::InvalidValue {
                key,
                message: err.to_string(),
            })
    })
}

fn parse_flag(key: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ConfigError::InvalidValue {
            key,
            message: format!("expected a boolean, got '{other}'"),
        }),
    }
}

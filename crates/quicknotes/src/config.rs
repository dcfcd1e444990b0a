use std::{
    env, fs,
    path::{Path, PathBuf},
    time::Duration,
};

use thiserror::Error;

use quicknotes_core::connection_file::parse_connection_file;

/// Errors raised while resolving the database location at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unable to read database connection file at {path}: {source}")]
    ConnectionFileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(
        "Could not parse SQLite file path from {path}. \
        Expected a 'File path:' or 'Connection string:' line."
    )]
    MissingDatabasePath { path: PathBuf },
    #[error("SQLite database directory does not exist: {0}")]
    MissingDirectory(PathBuf),
}

/// Which origins may call the API cross-origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin, mirrored back so credentials stay allowed.
    Any,
    /// Only the listed origins.
    List(Vec<String>),
}

impl CorsOrigins {
    /// Parse a comma-separated origin list. Empty or `*` means any origin.
    pub fn parse(value: &str) -> Self {
        let origins: Vec<String> = value
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        if origins.is_empty() || origins.iter().any(|origin| origin == "*") {
            CorsOrigins::Any
        } else {
            CorsOrigins::List(origins)
        }
    }
}

/// Resolved location of the SQLite file plus per-connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub path: PathBuf,
    pub busy_timeout: Duration,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection file describing where the SQLite file lives
    /// (default: "../database/db_connection.txt")
    pub connection_file: PathBuf,
    /// Explicit SQLite path, bypasses the connection file when set
    pub sqlite_path: Option<PathBuf>,
    /// SQLite busy timeout in milliseconds (default: 5000)
    pub sqlite_busy_timeout_ms: u64,
    /// Allowed CORS origins (default: any)
    pub cors_origins: CorsOrigins,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DB_CONNECTION_FILE` - Connection file path (default: "../database/db_connection.txt")
    /// - `SQLITE_PATH` - SQLite database path, overrides the connection file
    /// - `SQLITE_BUSY_TIMEOUT_MS` - Busy timeout in milliseconds (default: 5000)
    /// - `CORS_ALLOWED_ORIGINS` - Comma-separated origins, `*` for any (default: any)
    /// - `REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            connection_file: var("DB_CONNECTION_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("../database/db_connection.txt")),
            sqlite_path: var("SQLITE_PATH")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            sqlite_busy_timeout_ms: var("SQLITE_BUSY_TIMEOUT_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5_000),
            cors_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|v| CorsOrigins::parse(&v))
                .unwrap_or(CorsOrigins::Any),
            request_timeout_secs: var("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        }
    }

    /// Get the request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Resolve the database file location.
    ///
    /// Uses `sqlite_path` when set, otherwise reads the connection file. The
    /// parent directory of the resulting path must already exist.
    pub fn resolve_database(&self) -> Result<DatabaseConfig, ConfigError> {
        let path = match &self.sqlite_path {
            Some(path) => path.clone(),
            None => read_connection_file(&self.connection_file)?,
        };

        Ok(DatabaseConfig {
            path: ensure_parent_directory(path)?,
            busy_timeout: Duration::from_millis(self.sqlite_busy_timeout_ms),
        })
    }
}

fn read_connection_file(file: &Path) -> Result<PathBuf, ConfigError> {
    let contents =
        fs::read_to_string(file).map_err(|source| ConfigError::ConnectionFileUnreadable {
            path: file.to_path_buf(),
            source,
        })?;

    parse_connection_file(&contents).ok_or_else(|| ConfigError::MissingDatabasePath {
        path: file.to_path_buf(),
    })
}

/// Makes the path absolute and checks that its directory exists.
fn ensure_parent_directory(path: PathBuf) -> Result<PathBuf, ConfigError> {
    let absolute = std::path::absolute(&path).unwrap_or(path);

    match absolute.parent() {
        Some(dir) if dir.is_dir() => Ok(absolute),
        Some(dir) => Err(ConfigError::MissingDirectory(dir.to_path_buf())),
        None => Err(ConfigError::MissingDirectory(absolute)),
    }
}

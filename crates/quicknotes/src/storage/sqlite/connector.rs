//! Per-operation SQLite connection factory.

use std::path::Path;

use tokio_rusqlite::Connection;

use quicknotes_core::storage::Result;

use super::error::map_tokio_rusqlite_error;
use crate::config::DatabaseConfig;

/// Opens connections to the configured database file.
///
/// Each call to [`connect`](Self::connect) returns a new handle; the caller
/// holds it for one operation and drops it afterward, which closes it.
#[derive(Debug, Clone)]
pub struct SqliteConnector {
    config: DatabaseConfig,
}

impl SqliteConnector {
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    /// Path of the database file.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Opens a connection with the configured busy timeout applied.
    pub async fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.config.path)
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, "Note"))?;

        let busy_timeout = self.config.busy_timeout;
        conn.call(move |conn| {
            conn.busy_timeout(busy_timeout)
                .map_err(tokio_rusqlite::Error::Rusqlite)
        })
        .await
        .map_err(|e| map_tokio_rusqlite_error(e, "Note"))?;

        Ok(conn)
    }
}

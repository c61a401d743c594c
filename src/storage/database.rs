//! `SQLite` database connection and schema management.
//!
//! The database is stored at `~/.pets/shelter.db` by default and contains the
//! single `pets` table.

use std::path::Path;

use rusqlite::Connection;
use tracing::debug;

use crate::config::{ensure_dir, Config, Paths};
use crate::error::PetsError;

use super::schema;

/// Default database file name.
pub const DATABASE_NAME: &str = "shelter.db";

/// Default schema version.
pub const DATABASE_VERSION: u32 = 1;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the database described by the user configuration.
    ///
    /// `location` overrides the configured file. The schema version always
    /// comes from `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened.
    pub fn open(
        paths: &Paths,
        config: &Config,
        location: Option<&Path>,
    ) -> Result<Self, PetsError> {
        let path = location.map_or_else(|| config.database_path(paths), Path::to_path_buf);
        Self::open_at(&path, config.storage.schema_version)
    }

    /// Open the database at a specific path with the given schema version.
    ///
    /// Creates the file and the `pets` table if necessary. A different stored
    /// version recreates the table.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema cannot
    /// be brought to `version`.
    pub fn open_at(path: &Path, version: u32) -> Result<Self, PetsError> {
        if let Some(parent) = path.parent() {
            ensure_dir(parent)?;
        }

        debug!(path = %path.display(), version, "opening database");
        let conn = Connection::open(path).map_err(|e| {
            PetsError::Database(format!("Failed to open database {}: {e}", path.display()))
        })?;

        Self::with_connection(conn, version)
    }

    /// Open an in-memory database (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or the schema fails.
    pub fn open_in_memory(version: u32) -> Result<Self, PetsError> {
        let conn = Connection::open_in_memory().map_err(|e| {
            PetsError::Database(format!("Failed to open in-memory database: {e}"))
        })?;

        Self::with_connection(conn, version)
    }

    fn with_connection(mut conn: Connection, version: u32) -> Result<Self, PetsError> {
        schema::run(&mut conn, version)?;
        Ok(Self { conn })
    }

    /// Get the current schema version.
    ///
    /// # Errors
    ///
    /// Returns an error if the version cannot be read.
    pub fn schema_version(&self) -> Result<u32, PetsError> {
        schema::get_version(&self.conn)
    }

    /// Get a reference to the underlying connection.
    #[must_use]
    pub const fn connection(&self) -> &Connection {
        &self.conn
    }
}

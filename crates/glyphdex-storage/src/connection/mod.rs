//! Connection management: one sequential connection per pipeline run.

pub mod pragmas;
pub mod writer;

use std::path::{Path, PathBuf};

use glyphdex_core::errors::StorageError;
use rusqlite::Connection;

use self::pragmas::apply_pragmas;
use crate::migrations;

/// The single database handle for a pipeline run.
///
/// Opening applies pragmas and runs any pending migrations. All reads and
/// writes go through this one connection, sequentially.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open a database at the given path, apply pragmas, run migrations.
    pub fn open(path: &Path) -> Result<Self, StorageError> {
        let conn = Connection::open(path).map_err(|e| StorageError::OpenFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        apply_pragmas(&conn)?;
        migrations::run_migrations(&conn)?;

        Ok(Self {
            conn,
            path: Some(path.to_path_buf()),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StorageError> {
        let conn = Connection::open_in_memory().map_err(|e| StorageError::OpenFailed {
            path: ":memory:".to_string(),
            message: e.to_string(),
        })?;
        apply_pragmas(&conn)?;
        migrations::run_migrations(&conn)?;

        Ok(Self { conn, path: None })
    }

    /// The underlying connection.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// The database file path (None for in-memory).
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

//! PRAGMA configuration applied to the connection on open.
//!
//! WAL mode, NORMAL sync, 5s busy_timeout, foreign_keys ON. Foreign keys
//! matter: deleting an icon must cascade into its variants.

use glyphdex_core::errors::StorageError;
use rusqlite::Connection;

/// Apply all performance and safety pragmas to a connection.
pub fn apply_pragmas(conn: &Connection) -> Result<(), StorageError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
        PRAGMA foreign_keys = ON;
        ",
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    Ok(())
}

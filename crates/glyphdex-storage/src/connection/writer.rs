//! Write transaction helper — BEGIN IMMEDIATE for all-or-nothing writes.

use glyphdex_core::errors::StorageError;
use rusqlite::{Connection, Transaction, TransactionBehavior};

/// Execute a write operation inside a BEGIN IMMEDIATE transaction.
/// Acquires the write lock at transaction start, preventing SQLITE_BUSY
/// mid-write. On error the transaction rolls back when dropped, leaving
/// prior state intact.
pub fn with_immediate_transaction<F, T>(conn: &Connection, f: F) -> Result<T, StorageError>
where
    F: FnOnce(&rusqlite::Transaction<'_>) -> Result<T, StorageError>,
{
    // Issues a single `BEGIN IMMEDIATE`, acquiring the write lock at
    // transaction start. The returned transaction rolls back on drop and
    // commits only on the explicit `commit()` below.
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| StorageError::SqliteError {
            message: format!("failed to begin immediate transaction: {e}"),
        })?;

    let result = f(&tx)?;

    tx.commit().map_err(|e| StorageError::SqliteError {
        message: format!("failed to commit: {e}"),
    })?;

    Ok(result)
}

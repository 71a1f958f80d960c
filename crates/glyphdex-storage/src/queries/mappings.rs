//! mappings table queries.

use glyphdex_core::errors::StorageError;
use glyphdex_core::types::EquivalenceMapping;
use rusqlite::{params, Connection, Row};

use crate::connection::writer::with_immediate_transaction;

/// Atomically replace the entire stored mapping set.
///
/// DELETE of the previous set and INSERT of the new one run in a single
/// BEGIN IMMEDIATE transaction: a failure mid-write rolls back and leaves
/// the prior set intact.
pub fn replace_all(
    conn: &Connection,
    mappings: &[EquivalenceMapping],
) -> Result<(), StorageError> {
    with_immediate_transaction(conn, |tx| {
        tx.execute("DELETE FROM mappings", [])
            .map_err(|e| StorageError::SqliteError {
                message: format!("clear mappings: {e}"),
            })?;

        let mut stmt = tx
            .prepare_cached(
                "INSERT INTO mappings (
                    canonical_name, lucide_id, phosphor_id, hugeicons_id,
                    confidence, needs_review
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )
            .map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?;

        for m in mappings {
            stmt.execute(params![
                m.canonical_name,
                m.lucide_id,
                m.phosphor_id,
                m.hugeicons_id,
                m.confidence,
                m.needs_review as i32,
            ])
            .map_err(|e| StorageError::SqliteError {
                message: format!("insert mapping '{}': {e}", m.canonical_name),
            })?;
        }

        Ok(())
    })
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<EquivalenceMapping> {
    Ok(EquivalenceMapping {
        canonical_name: row.get(0)?,
        lucide_id: row.get(1)?,
        phosphor_id: row.get(2)?,
        hugeicons_id: row.get(3)?,
        confidence: row.get(4)?,
        needs_review: row.get(5)?,
    })
}

/// All stored mappings, ordered by canonical name (for inspection).
pub fn load_all(conn: &Connection) -> Result<Vec<EquivalenceMapping>, StorageError> {
    query_mappings(
        conn,
        "SELECT canonical_name, lucide_id, phosphor_id, hugeicons_id, confidence, needs_review
         FROM mappings ORDER BY canonical_name",
    )
}

/// Mappings flagged for manual review, most uncertain first. Ties break
/// by canonical name so the queue order is deterministic.
pub fn review_queue(conn: &Connection) -> Result<Vec<EquivalenceMapping>, StorageError> {
    query_mappings(
        conn,
        "SELECT canonical_name, lucide_id, phosphor_id, hugeicons_id, confidence, needs_review
         FROM mappings
         WHERE needs_review = 1
         ORDER BY confidence ASC, canonical_name ASC",
    )
}

fn query_mappings(conn: &Connection, sql: &str) -> Result<Vec<EquivalenceMapping>, StorageError> {
    let mut stmt = conn
        .prepare_cached(sql)
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let rows = stmt
        .query_map([], map_row)
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let mut result = Vec::new();
    for row in rows {
        result.push(row.map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?);
    }
    Ok(result)
}

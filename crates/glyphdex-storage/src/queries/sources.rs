//! sources table queries.

use glyphdex_core::errors::StorageError;
use glyphdex_core::types::Library;
use rusqlite::{params, Connection};

/// A source/library row.
#[derive(Debug, Clone)]
pub struct SourceRecord {
    pub id: String,
    pub name: String,
    pub version: String,
    pub license: Option<String>,
    pub total_icons: i64,
    pub extracted_at: i64,
}

/// Insert or update a source row after extraction. `total_icons` counts
/// base icons only (variants live in their own table).
pub fn upsert_source(
    conn: &Connection,
    library: Library,
    version: &str,
    total_icons: i64,
) -> Result<(), StorageError> {
    conn.execute(
        "INSERT INTO sources (id, name, version, license, total_icons, extracted_at)
         VALUES (?1, ?2, ?3, ?4, ?5, unixepoch())
         ON CONFLICT(id) DO UPDATE SET
             version = excluded.version,
             total_icons = excluded.total_icons,
             extracted_at = excluded.extracted_at",
        params![
            library.id(),
            library.display_name(),
            version,
            library.license(),
            total_icons
        ],
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    Ok(())
}

/// All registered sources, ordered by id.
pub fn list_sources(conn: &Connection) -> Result<Vec<SourceRecord>, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, name, version, license, total_icons, extracted_at
             FROM sources ORDER BY id",
        )
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let rows = stmt
        .query_map([], |row| {
            Ok(SourceRecord {
                id: row.get(0)?,
                name: row.get(1)?,
                version: row.get(2)?,
                license: row.get(3)?,
                total_icons: row.get(4)?,
                extracted_at: row.get(5)?,
            })
        })
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

/// Count stored icons, optionally restricted to one library.
pub fn icon_count(conn: &Connection, library: Option<Library>) -> Result<i64, StorageError> {
    let result = match library {
        Some(lib) => conn.query_row(
            "SELECT COUNT(*) FROM icons WHERE source_id = ?1",
            params![lib.id()],
            |row| row.get(0),
        ),
        None => conn.query_row("SELECT COUNT(*) FROM icons", [], |row| row.get(0)),
    };
    result.map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })
}

/// Delete all icons of a source (for re-extraction). Variants cascade.
pub fn clear_source(conn: &Connection, library: Library) -> Result<usize, StorageError> {
    conn.execute(
        "DELETE FROM icons WHERE source_id = ?1",
        params![library.id()],
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })
}

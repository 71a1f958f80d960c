//! icons and variants table queries, plus the name-index loader.

use glyphdex_core::errors::StorageError;
use glyphdex_core::types::{ExtractedIcon, IconNameRecord, Library, NameIndex};
use rusqlite::{params, Connection};

/// Insert or refresh a base icon.
pub fn insert_icon(conn: &Connection, icon: &ExtractedIcon) -> Result<(), StorageError> {
    let tags_json = if icon.tags.is_empty() {
        None
    } else {
        Some(serde_json::to_string(&icon.tags).map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?)
    };
    let path_json = if icon.path_data.is_empty() {
        None
    } else {
        Some(
            serde_json::to_string(&icon.path_data).map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?,
        )
    };

    conn.execute(
        "INSERT INTO icons (
            id, source_id, name, normalized_name, category, tags, view_box,
            content, path_data, default_stroke, default_fill, stroke_width, brand_color
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
        ON CONFLICT(id) DO UPDATE SET
            category = excluded.category,
            tags = excluded.tags,
            content = excluded.content,
            path_data = excluded.path_data",
        params![
            icon.icon_id(),
            icon.library.id(),
            icon.name,
            icon.normalized_name,
            icon.category,
            tags_json,
            icon.view_box,
            icon.content,
            path_json,
            icon.default_stroke as i32,
            icon.default_fill as i32,
            icon.stroke_width,
            icon.brand_color,
        ],
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Insert or refresh a variant row. The base icon must already exist.
pub fn insert_variant(conn: &Connection, icon: &ExtractedIcon) -> Result<(), StorageError> {
    let variant_id = icon.variant_id().ok_or_else(|| StorageError::SqliteError {
        message: format!("icon {} has no variant", icon.icon_id()),
    })?;
    let variant = icon.variant.as_deref().unwrap_or_default();
    let path_json = if icon.path_data.is_empty() {
        None
    } else {
        Some(
            serde_json::to_string(&icon.path_data).map_err(|e| StorageError::SqliteError {
                message: e.to_string(),
            })?,
        )
    };

    conn.execute(
        "INSERT INTO variants (id, icon_id, variant, content, path_data)
         VALUES (?1, ?2, ?3, ?4, ?5)
         ON CONFLICT(id) DO UPDATE SET
             content = excluded.content,
             path_data = excluded.path_data",
        params![variant_id, icon.icon_id(), variant, icon.content, path_json],
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })?;
    Ok(())
}

/// Insert a slice of extracted icons in transactional batches.
///
/// Routes variants to the variants table. Per-icon failures are logged
/// and counted, not fatal — one broken asset must not sink a whole
/// extraction run. Returns `(inserted, errors)`.
pub fn batch_insert(
    conn: &Connection,
    icons: &[ExtractedIcon],
    batch_size: usize,
) -> Result<(usize, usize), StorageError> {
    let mut inserted = 0usize;
    let mut errors = 0usize;

    for chunk in icons.chunks(batch_size.max(1)) {
        let tx = conn
            .unchecked_transaction()
            .map_err(|e| StorageError::SqliteError {
                message: format!("batch_insert begin: {e}"),
            })?;

        for icon in chunk {
            let result = if icon.is_variant() {
                insert_variant(&tx, icon)
            } else {
                insert_icon(&tx, icon)
            };
            match result {
                Ok(()) => inserted += 1,
                Err(e) => {
                    errors += 1;
                    tracing::warn!(icon = %icon.icon_id(), error = %e, "failed to insert icon");
                }
            }
        }

        tx.commit().map_err(|e| StorageError::SqliteError {
            message: format!("batch_insert commit: {e}"),
        })?;
    }

    Ok((inserted, errors))
}

/// Load one library's name index: all `(id, normalized_name)` pairs in
/// insertion order. The order is part of the mapping contract — candidate
/// pools are scanned in it and ties break to the first name.
pub fn load_name_index(conn: &Connection, library: Library) -> Result<NameIndex, StorageError> {
    let mut stmt = conn
        .prepare_cached(
            "SELECT id, normalized_name FROM icons WHERE source_id = ?1 ORDER BY rowid",
        )
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let rows = stmt
        .query_map(params![library.id()], |row| {
            Ok(IconNameRecord {
                id: row.get(0)?,
                normalized_name: row.get(1)?,
            })
        })
        .map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?;

    let mut index = NameIndex::new();
    for row in rows {
        index.insert(row.map_err(|e| StorageError::SqliteError {
            message: e.to_string(),
        })?);
    }
    Ok(index)
}

/// Count variant rows for one library.
pub fn variant_count(conn: &Connection, library: Library) -> Result<i64, StorageError> {
    conn.query_row(
        "SELECT COUNT(*) FROM variants WHERE icon_id LIKE ?1 || ':%'",
        params![library.id()],
        |row| row.get(0),
    )
    .map_err(|e| StorageError::SqliteError {
        message: e.to_string(),
    })
}

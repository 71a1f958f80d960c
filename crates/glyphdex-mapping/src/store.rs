//! Persistence and export of the computed mapping set.
//!
//! `save` and `export` are independent operations: a failure in one must
//! not be reported as, or affect, the other. Summary counts emitted here
//! are informational — the absence of an error is the success signal.

use std::path::Path;

use glyphdex_core::errors::MappingError;
use glyphdex_core::types::{EquivalenceMapping, MappedLibrary};
use glyphdex_storage::{queries, Database};

/// Atomically replace the stored mapping set with `mappings`.
///
/// All previous mappings are discarded in the same transaction as the
/// inserts; on failure the prior set is left intact and
/// `MappingError::Persistence` is returned.
pub fn save(db: &Database, mappings: &[EquivalenceMapping]) -> Result<(), MappingError> {
    queries::mappings::replace_all(db.conn(), mappings).map_err(|e| {
        MappingError::Persistence {
            reason: e.to_string(),
        }
    })?;

    let review = mappings.iter().filter(|m| m.needs_review).count();
    tracing::info!(total = mappings.len(), needs_review = review, "saved mapping set");
    for lib in MappedLibrary::ALL {
        let matched = mappings.iter().filter(|m| m.match_id(lib).is_some()).count();
        tracing::info!(library = %lib, matches = matched, "per-library match count");
    }

    Ok(())
}

/// Serialize `mappings` to a pretty-printed JSON file for human review.
///
/// Field order is stable (struct declaration order) and any existing
/// file at `path` is overwritten. Does not touch the store.
pub fn export(mappings: &[EquivalenceMapping], path: &Path) -> Result<(), MappingError> {
    let json = serde_json::to_string_pretty(mappings).map_err(|e| MappingError::Export {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    std::fs::write(path, json).map_err(|e| MappingError::Export {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;

    tracing::info!(count = mappings.len(), path = %path.display(), "exported mappings");
    Ok(())
}

/// Stored mappings awaiting manual review, most uncertain first
/// (ascending confidence, ties by canonical name).
pub fn review_queue(db: &Database) -> Result<Vec<EquivalenceMapping>, MappingError> {
    queries::mappings::review_queue(db.conn()).map_err(|e| MappingError::Persistence {
        reason: e.to_string(),
    })
}

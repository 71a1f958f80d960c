//! Mapping subsystem errors.
//!
//! The three kinds are deliberately distinct: a caller must be able to
//! tell a failed name-index load from a failed save from a failed export,
//! since save and export are independent operations.

/// Errors raised by the cross-library equivalence mapper.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    /// A library's name index could not be loaded. The run aborts before
    /// any mapping is computed; a partial canonical index would silently
    /// under-report matches.
    #[error("name index unavailable for library '{library}': {reason}")]
    DataUnavailable { library: String, reason: String },

    /// The save transaction could not complete. The prior mapping set is
    /// left intact.
    #[error("failed to persist mapping set: {reason}")]
    Persistence { reason: String },

    /// The interchange file could not be written. Already-saved mappings
    /// in the store are unaffected.
    #[error("failed to export mappings to {path}: {reason}")]
    Export { path: String, reason: String },
}

//! Shared constants for the glyphdex pipeline.

/// Glyphdex version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum similarity score for a cross-library match to be accepted.
/// Configurable per run; this is the compiled default.
pub const DEFAULT_CONFIDENCE_THRESHOLD: u8 = 80;

/// Accepted matches scoring below this are flagged for manual review.
/// Fixed policy, not per-run configurable.
pub const REVIEW_CUTOFF: u8 = 90;

/// Default database file path.
pub const DEFAULT_DB_PATH: &str = "./glyphdex.db";

/// Default destination for the exported mappings interchange file.
pub const DEFAULT_EXPORT_PATH: &str = "./mappings.json";

/// Default vendor directory holding the installed icon packages.
pub const DEFAULT_VENDOR_DIR: &str = "./vendor/node_modules";

/// Batch size for icon inserts during registry load.
pub const INSERT_BATCH_SIZE: usize = 100;

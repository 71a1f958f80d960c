//! Storage-layer errors for SQLite operations.

/// Errors raised by the SQLite persistence layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("SQLite error: {message}")]
    SqliteError { message: String },

    #[error("migration failed at version {version}: {message}")]
    MigrationFailed { version: u32, message: String },

    #[error("failed to open database at {path}: {message}")]
    OpenFailed { path: String, message: String },
}

//! Top-level pipeline error, aggregating subsystem errors via `From`.

use super::{ConfigError, ExtractError, MappingError, StorageError};

/// Errors that can surface from a full pipeline invocation.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("extraction error: {0}")]
    Extract(#[from] ExtractError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

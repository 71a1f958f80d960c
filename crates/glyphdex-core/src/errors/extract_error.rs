//! Extraction errors.

/// Errors raised by the per-vendor icon extractors.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("package directory not found for {library}: {path}")]
    PackageNotFound { library: String, path: String },

    #[error("failed to read {path}: {message}")]
    ReadFailed { path: String, message: String },

    #[error("malformed asset {path}: {message}")]
    MalformedAsset { path: String, message: String },
}

//! Error handling for glyphdex.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod extract_error;
pub mod mapping_error;
pub mod pipeline_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use extract_error::ExtractError;
pub use mapping_error::MappingError;
pub use pipeline_error::PipelineError;
pub use storage_error::StorageError;

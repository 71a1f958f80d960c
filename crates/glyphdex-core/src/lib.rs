//! # glyphdex-core
//!
//! Foundation crate for the glyphdex icon pipeline.
//! Defines all types, errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::GlyphdexConfig;
pub use errors::{ConfigError, ExtractError, MappingError, PipelineError, StorageError};
pub use types::{
    EquivalenceMapping, ExtractedIcon, IconNameRecord, Library, MappedLibrary, NameIndex,
    SvgElement,
};

//! # glyphdex-extract
//!
//! Turns heterogeneous on-disk icon packages (a vendored node_modules
//! tree) into uniform [`ExtractedIcon`](glyphdex_core::types::ExtractedIcon)
//! records, and loads them into the store.
//!
//! One extractor per vendor package layout: flat SVG directories
//! (Lucide, Feather), weight-suffixed variant sets (Phosphor), style
//! subdirectories (Heroicons), compiled JS components (HugeIcons), and
//! metadata-keyed brand sets (Simple Icons).

pub mod extractors;
pub mod manifest;
pub mod naming;
pub mod registry;
pub mod svg;
pub mod taxonomy;

pub use extractors::Extractor;
pub use registry::{load_library, LoadSummary};

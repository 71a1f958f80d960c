//! # glyphdex-mapping
//!
//! The cross-library equivalence mapper: for every icon name in the
//! canonical library, find the best fuzzy match in each of the other
//! mapped libraries, score the result, and flag uncertain matches for
//! manual review. The full mapping set replaces the stored one per run
//! and can be exported to a JSON interchange file.
//!
//! Matching is O(|canonical| × Σ|targets|) string comparisons — fine at
//! a few thousand names per library, and the scaling limit of this
//! design (no candidate pruning or blocking).

pub mod auto_mapper;
pub mod resolver;
pub mod similarity;
pub mod store;

pub use auto_mapper::{AutoMapper, MapperConfig};
pub use resolver::{find_best, BestMatch};
pub use similarity::similarity;

//! Core data model: libraries, extracted icons, name indices, mappings.

pub mod icon;
pub mod library;
pub mod mapping;
pub mod name_index;

pub use icon::{ExtractedIcon, SvgElement};
pub use library::{Library, MappedLibrary};
pub use mapping::EquivalenceMapping;
pub use name_index::{IconNameRecord, NameIndex};

//! Query modules, one per table family. Free functions over a
//! `&Connection`; mapping policy lives upstream, never in SQL.

pub mod icons;
pub mod mappings;
pub mod sources;

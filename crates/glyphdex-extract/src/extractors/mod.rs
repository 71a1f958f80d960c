//! The extractor seam and the per-vendor implementations.

pub mod feather;
pub mod heroicons;
pub mod hugeicons;
pub mod lucide;
pub mod phosphor;
pub mod simple_icons;

use std::path::{Path, PathBuf};

use glyphdex_core::errors::ExtractError;
use glyphdex_core::types::{ExtractedIcon, Library};

pub use feather::FeatherExtractor;
pub use heroicons::HeroiconsExtractor;
pub use hugeicons::HugeIconsExtractor;
pub use lucide::LucideExtractor;
pub use phosphor::PhosphorExtractor;
pub use simple_icons::SimpleIconsExtractor;

/// A per-vendor icon extractor over a vendored package directory.
pub trait Extractor {
    fn library(&self) -> Library;

    /// Version of the vendored package, `"unknown"` if unreadable.
    fn version(&self) -> String;

    /// Extract every icon the package ships. Individually broken assets
    /// are logged and skipped; a missing package root is an error.
    fn extract_all(&self) -> Result<Vec<ExtractedIcon>, ExtractError>;
}

/// Build the extractor for a library over the given vendor directory.
pub fn extractor_for(library: Library, vendor_dir: &Path) -> Box<dyn Extractor> {
    match library {
        Library::Lucide => Box::new(LucideExtractor::new(vendor_dir)),
        Library::Feather => Box::new(FeatherExtractor::new(vendor_dir)),
        Library::Phosphor => Box::new(PhosphorExtractor::new(vendor_dir)),
        Library::Heroicons => Box::new(HeroiconsExtractor::new(vendor_dir)),
        Library::HugeIcons => Box::new(HugeIconsExtractor::new(vendor_dir)),
        Library::SimpleIcons => Box::new(SimpleIconsExtractor::new(vendor_dir)),
    }
}

/// Files in `dir` whose names end with `suffix`, sorted by file name so
/// extraction output order is reproducible.
pub(crate) fn sorted_files(dir: &Path, suffix: &str) -> Result<Vec<PathBuf>, ExtractError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ExtractError::ReadFailed {
        path: dir.display().to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| ExtractError::ReadFailed {
            path: dir.display().to_string(),
            message: e.to_string(),
        })?;
        let path = entry.path();
        let is_match = path.is_file()
            && path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(suffix));
        if is_match {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}

/// The kebab-case stem of an asset path.
pub(crate) fn file_stem(path: &Path) -> String {
    path.file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string()
}

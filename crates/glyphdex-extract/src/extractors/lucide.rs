//! Lucide extractor: `lucide-static/icons/*.svg`, kebab filenames,
//! stroke-based.

use std::path::{Path, PathBuf};

use glyphdex_core::errors::ExtractError;
use glyphdex_core::types::{ExtractedIcon, Library};

use crate::extractors::{file_stem, sorted_files, Extractor};
use crate::manifest::read_package_version;
use crate::naming::to_pascal;
use crate::svg::parse_svg;
use crate::taxonomy::{guess_category, name_tags, CategoryTable, SynonymTable};

const CATEGORIES: CategoryTable = &[
    ("arrows", &["arrow", "chevron", "move", "corner"]),
    (
        "media",
        &["play", "pause", "stop", "volume", "mic", "video", "music", "camera"],
    ),
    ("files", &["file", "folder", "document", "copy", "clipboard"]),
    ("communication", &["mail", "message", "phone", "send", "inbox"]),
    ("weather", &["sun", "moon", "cloud", "rain", "snow", "wind"]),
    (
        "devices",
        &["monitor", "laptop", "tablet", "smartphone", "printer", "keyboard"],
    ),
    ("social", &["share", "heart", "thumb", "star", "bookmark"]),
    ("navigation", &["home", "menu", "search", "filter", "grid", "list"]),
    ("editing", &["edit", "pen", "pencil", "scissors", "crop", "rotate"]),
    ("shapes", &["circle", "square", "triangle", "hexagon", "octagon"]),
];

const SYNONYMS: SynonymTable = &[
    ("arrow", &["direction", "pointer", "navigation"]),
    ("home", &["house", "main", "start"]),
    ("search", &["find", "magnify", "lookup"]),
    ("user", &["person", "account", "profile"]),
    ("settings", &["config", "preferences", "options", "gear"]),
    ("mail", &["email", "envelope", "message"]),
    ("heart", &["love", "favorite", "like"]),
    ("star", &["favorite", "rating", "bookmark"]),
    ("check", &["done", "complete", "success", "tick"]),
    ("x", &["close", "remove", "delete", "cancel"]),
    ("plus", &["add", "new", "create"]),
    ("minus", &["remove", "subtract", "less"]),
];

pub struct LucideExtractor {
    package_dir: PathBuf,
    icons_dir: PathBuf,
}

impl LucideExtractor {
    pub fn new(vendor_dir: &Path) -> Self {
        let package_dir = vendor_dir.join("lucide-static");
        let icons_dir = package_dir.join("icons");
        Self {
            package_dir,
            icons_dir,
        }
    }

    fn extract_one(&self, path: &Path) -> Result<ExtractedIcon, ExtractError> {
        let content = std::fs::read_to_string(path).map_err(|e| ExtractError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let svg = parse_svg(&content, &path.display().to_string())?;

        // Lucide uses kebab-case filenames.
        let normalized_name = file_stem(path);

        Ok(ExtractedIcon {
            library: Library::Lucide,
            name: to_pascal(&normalized_name),
            normalized_name: normalized_name.clone(),
            view_box: svg.view_box.unwrap_or_else(|| "0 0 24 24".to_string()),
            content: svg.content,
            path_data: svg.elements,
            default_stroke: true,
            default_fill: false,
            stroke_width: Some(svg.stroke_width.unwrap_or_else(|| "2".to_string())),
            category: Some(guess_category(&normalized_name, CATEGORIES)),
            tags: name_tags(&normalized_name, SYNONYMS),
            variant: None,
            brand_color: None,
        })
    }
}

impl Extractor for LucideExtractor {
    fn library(&self) -> Library {
        Library::Lucide
    }

    fn version(&self) -> String {
        read_package_version(&self.package_dir)
    }

    fn extract_all(&self) -> Result<Vec<ExtractedIcon>, ExtractError> {
        if !self.icons_dir.exists() {
            return Err(ExtractError::PackageNotFound {
                library: self.library().id().to_string(),
                path: self.icons_dir.display().to_string(),
            });
        }

        let files = sorted_files(&self.icons_dir, ".svg")?;
        tracing::info!(count = files.len(), "found lucide icons");

        let mut icons = Vec::with_capacity(files.len());
        for file in &files {
            match self.extract_one(file) {
                Ok(icon) => icons.push(icon),
                Err(e) => {
                    tracing::warn!(file = %file.display(), error = %e, "failed to extract icon");
                }
            }
        }
        Ok(icons)
    }
}

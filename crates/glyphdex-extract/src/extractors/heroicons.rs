//! Heroicons extractor: `heroicons/24/{outline,solid}/*.svg`.
//!
//! The style is folded into the normalized name (`bell-outline`,
//! `bell-solid`) rather than stored as a variant, so outline and solid
//! are distinct icons.

use std::path::{Path, PathBuf};

use glyphdex_core::errors::ExtractError;
use glyphdex_core::types::{ExtractedIcon, Library};

use crate::extractors::{file_stem, sorted_files, Extractor};
use crate::manifest::read_package_version;
use crate::naming::to_pascal;
use crate::svg::parse_svg;
use crate::taxonomy::{guess_category, name_tags, CategoryTable, SynonymTable};

const STYLES: [&str; 2] = ["outline", "solid"];

const CATEGORIES: CategoryTable = &[
    ("arrows", &["arrow", "chevron"]),
    ("media", &["play", "pause", "stop", "video", "music", "camera", "film"]),
    ("files", &["document", "folder", "paper", "clipboard"]),
    ("communication", &["envelope", "chat", "phone", "inbox"]),
    ("social", &["share", "heart", "hand-thumb", "star", "bookmark"]),
    ("navigation", &["home", "magnifying-glass", "bars", "list"]),
    ("editing", &["pencil", "scissors", "crop"]),
    ("shapes", &["square", "circle"]),
];

const SYNONYMS: SynonymTable = &[
    ("magnifying-glass", &["search", "find", "lookup"]),
    ("envelope", &["mail", "email", "message"]),
    ("bars", &["menu", "hamburger"]),
    ("hand-thumb", &["like", "thumbs"]),
];

pub struct HeroiconsExtractor {
    package_dir: PathBuf,
    base_dir: PathBuf,
}

impl HeroiconsExtractor {
    pub fn new(vendor_dir: &Path) -> Self {
        let package_dir = vendor_dir.join("heroicons");
        let base_dir = package_dir.join("24");
        Self {
            package_dir,
            base_dir,
        }
    }

    fn extract_one(&self, path: &Path, style: &str) -> Result<ExtractedIcon, ExtractError> {
        let content = std::fs::read_to_string(path).map_err(|e| ExtractError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let svg = parse_svg(&content, &path.display().to_string())?;

        let base_name = file_stem(path);
        let normalized_name = format!("{base_name}-{style}");
        let is_outline = style == "outline";

        Ok(ExtractedIcon {
            library: Library::Heroicons,
            name: to_pascal(&normalized_name),
            normalized_name,
            view_box: svg.view_box.unwrap_or_else(|| "0 0 24 24".to_string()),
            content: svg.content,
            path_data: svg.elements,
            default_stroke: is_outline,
            default_fill: !is_outline,
            stroke_width: is_outline.then(|| "1.5".to_string()),
            category: Some(guess_category(&base_name, CATEGORIES)),
            tags: name_tags(&base_name, SYNONYMS),
            variant: None,
            brand_color: None,
        })
    }
}

impl Extractor for HeroiconsExtractor {
    fn library(&self) -> Library {
        Library::Heroicons
    }

    fn version(&self) -> String {
        read_package_version(&self.package_dir)
    }

    fn extract_all(&self) -> Result<Vec<ExtractedIcon>, ExtractError> {
        if !self.base_dir.exists() {
            return Err(ExtractError::PackageNotFound {
                library: self.library().id().to_string(),
                path: self.base_dir.display().to_string(),
            });
        }

        let mut icons = Vec::new();
        for style in STYLES {
            let style_dir = self.base_dir.join(style);
            if !style_dir.exists() {
                tracing::warn!(style = style, "heroicons style directory not found");
                continue;
            }

            let files = sorted_files(&style_dir, ".svg")?;
            tracing::info!(count = files.len(), style = style, "found heroicons icons");

            for file in &files {
                match self.extract_one(file, style) {
                    Ok(icon) => icons.push(icon),
                    Err(e) => {
                        tracing::warn!(file = %file.display(), error = %e, "failed to extract icon");
                    }
                }
            }
        }
        Ok(icons)
    }
}

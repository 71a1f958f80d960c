//! Feather extractor: `feather-icons/dist/icons/*.svg`. Same shape as
//! Lucide, smaller taxonomy.

use std::path::{Path, PathBuf};

use glyphdex_core::errors::ExtractError;
use glyphdex_core::types::{ExtractedIcon, Library};

use crate::extractors::{file_stem, sorted_files, Extractor};
use crate::manifest::read_package_version;
use crate::naming::to_pascal;
use crate::svg::parse_svg;
use crate::taxonomy::{guess_category, split_tags, CategoryTable};

const CATEGORIES: CategoryTable = &[
    ("arrows", &["arrow", "chevron"]),
    (
        "media",
        &["play", "pause", "stop", "volume", "mic", "video", "music", "camera"],
    ),
    ("files", &["file", "folder"]),
    ("communication", &["mail", "message", "phone"]),
    ("social", &["share", "heart", "thumbs", "star"]),
    ("navigation", &["home", "search", "menu"]),
];

pub struct FeatherExtractor {
    package_dir: PathBuf,
    icons_dir: PathBuf,
}

impl FeatherExtractor {
    pub fn new(vendor_dir: &Path) -> Self {
        let package_dir = vendor_dir.join("feather-icons");
        let icons_dir = package_dir.join("dist").join("icons");
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

        let normalized_name = file_stem(path);

        Ok(ExtractedIcon {
            library: Library::Feather,
            name: to_pascal(&normalized_name),
            normalized_name: normalized_name.clone(),
            view_box: svg.view_box.unwrap_or_else(|| "0 0 24 24".to_string()),
            content: svg.content,
            path_data: svg.elements,
            default_stroke: true,
            default_fill: false,
            stroke_width: Some(svg.stroke_width.unwrap_or_else(|| "2".to_string())),
            category: Some(guess_category(&normalized_name, CATEGORIES)),
            tags: split_tags(&normalized_name),
            variant: None,
            brand_color: None,
        })
    }
}

impl Extractor for FeatherExtractor {
    fn library(&self) -> Library {
        Library::Feather
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
        tracing::info!(count = files.len(), "found feather icons");

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

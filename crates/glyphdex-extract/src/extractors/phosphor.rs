//! Phosphor extractor: `@phosphor-icons/core/assets/<weight>/*.svg`.
//!
//! Six weights; `regular` is the base icon, the rest become variant rows.
//! Two-pass extraction so a variant is only kept when its base icon
//! exists — orphaned variants would violate the schema.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashSet;

use glyphdex_core::errors::ExtractError;
use glyphdex_core::types::{ExtractedIcon, Library};

use crate::extractors::{file_stem, sorted_files, Extractor};
use crate::manifest::read_package_version;
use crate::naming::to_pascal;
use crate::svg::parse_svg;
use crate::taxonomy::{guess_category, name_tags, CategoryTable, SynonymTable};

const WEIGHTS: [&str; 6] = ["regular", "bold", "fill", "duotone", "light", "thin"];
const PRIMARY_WEIGHT: &str = "regular";

const CATEGORIES: CategoryTable = &[
    ("arrows", &["arrow", "caret", "caret-circle", "caret-double"]),
    (
        "media",
        &["play", "pause", "stop", "speaker", "microphone", "video", "music", "camera"],
    ),
    ("files", &["file", "folder", "clipboard", "notebook"]),
    ("communication", &["envelope", "chat", "phone", "paper-plane"]),
    ("weather", &["sun", "moon", "cloud", "drop", "wind", "thermometer"]),
    (
        "devices",
        &["desktop", "laptop", "device-tablet", "device-mobile", "printer", "keyboard"],
    ),
    ("social", &["share", "heart", "thumbs-up", "star", "bookmark"]),
    (
        "navigation",
        &["house", "list", "magnifying-glass", "funnel", "squares-four"],
    ),
    ("editing", &["pencil", "pen", "scissors", "crop", "selection"]),
    ("shapes", &["circle", "square", "triangle", "hexagon", "octagon"]),
];

const SYNONYMS: SynonymTable = &[
    ("arrow", &["direction", "pointer", "navigation"]),
    ("house", &["home", "main", "start"]),
    ("magnifying-glass", &["search", "find", "lookup"]),
    ("user", &["person", "account", "profile"]),
    ("gear", &["settings", "config", "preferences", "options"]),
    ("envelope", &["mail", "email", "message"]),
    ("heart", &["love", "favorite", "like"]),
    ("star", &["favorite", "rating", "bookmark"]),
    ("check", &["done", "complete", "success", "tick"]),
    ("x", &["close", "remove", "delete", "cancel"]),
    ("plus", &["add", "new", "create"]),
    ("minus", &["remove", "subtract", "less"]),
];

pub struct PhosphorExtractor {
    package_dir: PathBuf,
    assets_dir: PathBuf,
}

impl PhosphorExtractor {
    pub fn new(vendor_dir: &Path) -> Self {
        let package_dir = vendor_dir.join("@phosphor-icons").join("core");
        let assets_dir = package_dir.join("assets");
        Self {
            package_dir,
            assets_dir,
        }
    }

    fn extract_one(&self, path: &Path, weight: &str) -> Result<ExtractedIcon, ExtractError> {
        let content = std::fs::read_to_string(path).map_err(|e| ExtractError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let svg = parse_svg(&content, &path.display().to_string())?;

        // Non-regular filenames carry the weight: "arrow-right-bold.svg".
        let mut normalized_name = file_stem(path);
        if weight != PRIMARY_WEIGHT {
            normalized_name = normalized_name
                .strip_suffix(&format!("-{weight}"))
                .unwrap_or(&normalized_name)
                .to_string();
        }

        let is_base = weight == PRIMARY_WEIGHT;

        // All Phosphor weights are fill-based, no stroke-width.
        Ok(ExtractedIcon {
            library: Library::Phosphor,
            name: to_pascal(&normalized_name),
            normalized_name: normalized_name.clone(),
            view_box: svg.view_box.unwrap_or_else(|| "0 0 256 256".to_string()),
            content: svg.content,
            path_data: svg.elements,
            default_stroke: false,
            default_fill: true,
            stroke_width: None,
            category: is_base.then(|| guess_category(&normalized_name, CATEGORIES)),
            tags: name_tags(&normalized_name, SYNONYMS),
            variant: (!is_base).then(|| weight.to_string()),
            brand_color: None,
        })
    }
}

impl Extractor for PhosphorExtractor {
    fn library(&self) -> Library {
        Library::Phosphor
    }

    fn version(&self) -> String {
        read_package_version(&self.package_dir)
    }

    fn extract_all(&self) -> Result<Vec<ExtractedIcon>, ExtractError> {
        if !self.assets_dir.exists() {
            return Err(ExtractError::PackageNotFound {
                library: self.library().id().to_string(),
                path: self.assets_dir.display().to_string(),
            });
        }

        let mut icons = Vec::new();
        let mut base_names: FxHashSet<String> = FxHashSet::default();

        // First pass: base (regular) icons.
        let regular_dir = self.assets_dir.join(PRIMARY_WEIGHT);
        if regular_dir.exists() {
            let files = sorted_files(&regular_dir, ".svg")?;
            tracing::info!(count = files.len(), weight = PRIMARY_WEIGHT, "found phosphor icons");

            for file in &files {
                match self.extract_one(file, PRIMARY_WEIGHT) {
                    Ok(icon) => {
                        base_names.insert(icon.normalized_name.clone());
                        icons.push(icon);
                    }
                    Err(e) => {
                        tracing::warn!(file = %file.display(), error = %e, "failed to extract icon");
                    }
                }
            }
        }

        // Second pass: variant weights, only where a base icon exists.
        for &weight in WEIGHTS.iter().filter(|w| **w != PRIMARY_WEIGHT) {
            let weight_dir = self.assets_dir.join(weight);
            if !weight_dir.exists() {
                continue;
            }
            let files = sorted_files(&weight_dir, ".svg")?;
            tracing::info!(count = files.len(), weight = weight, "found phosphor icons");

            for file in &files {
                match self.extract_one(file, weight) {
                    Ok(icon) if base_names.contains(&icon.normalized_name) => icons.push(icon),
                    Ok(icon) => {
                        tracing::warn!(
                            name = %icon.normalized_name,
                            weight = weight,
                            "skipping variant with no base icon"
                        );
                    }
                    Err(e) => {
                        tracing::warn!(file = %file.display(), error = %e, "failed to extract icon");
                    }
                }
            }
        }

        Ok(icons)
    }
}

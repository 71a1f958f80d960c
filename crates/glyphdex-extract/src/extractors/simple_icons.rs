//! Simple Icons extractor: brand logos from `simple-icons/icons/*.svg`
//! plus the `data/simple-icons.json` metadata file (titles, slugs, brand
//! colors).

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use glyphdex_core::errors::ExtractError;
use glyphdex_core::types::{ExtractedIcon, Library};

use crate::extractors::{file_stem, sorted_files, Extractor};
use crate::manifest::read_package_version;
use crate::svg::parse_svg;

/// One entry of `data/simple-icons.json`. Unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
struct BrandMeta {
    title: String,
    slug: String,
    #[serde(default)]
    hex: Option<String>,
    #[serde(default)]
    aliases: Option<BrandAliases>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct BrandAliases {
    #[serde(default)]
    aka: Vec<String>,
}

pub struct SimpleIconsExtractor {
    package_dir: PathBuf,
    icons_dir: PathBuf,
    data_file: PathBuf,
}

impl SimpleIconsExtractor {
    pub fn new(vendor_dir: &Path) -> Self {
        let package_dir = vendor_dir.join("simple-icons");
        let icons_dir = package_dir.join("icons");
        let data_file = package_dir.join("data").join("simple-icons.json");
        Self {
            package_dir,
            icons_dir,
            data_file,
        }
    }

    fn load_metadata(&self) -> Result<FxHashMap<String, BrandMeta>, ExtractError> {
        let content =
            std::fs::read_to_string(&self.data_file).map_err(|e| ExtractError::ReadFailed {
                path: self.data_file.display().to_string(),
                message: e.to_string(),
            })?;
        let entries: Vec<BrandMeta> =
            serde_json::from_str(&content).map_err(|e| ExtractError::MalformedAsset {
                path: self.data_file.display().to_string(),
                message: e.to_string(),
            })?;

        Ok(entries
            .into_iter()
            .map(|meta| (meta.slug.clone(), meta))
            .collect())
    }

    fn extract_one(&self, path: &Path, meta: &BrandMeta) -> Result<ExtractedIcon, ExtractError> {
        let content = std::fs::read_to_string(path).map_err(|e| ExtractError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let svg = parse_svg(&content, &path.display().to_string())?;

        Ok(ExtractedIcon {
            library: Library::SimpleIcons,
            name: title_to_pascal(&meta.title),
            normalized_name: meta.slug.clone(),
            view_box: svg.view_box.unwrap_or_else(|| "0 0 24 24".to_string()),
            content: svg.content,
            path_data: svg.elements,
            // Brand icons are fill-based.
            default_stroke: false,
            default_fill: true,
            stroke_width: None,
            category: Some("brands".to_string()),
            tags: brand_tags(meta),
            variant: None,
            brand_color: meta.hex.as_deref().and_then(validate_hex_color),
        })
    }
}

/// Validate and format a hex brand color: 6 hex digits, `#`-prefixed,
/// uppercase. Invalid colors degrade to `None`.
fn validate_hex_color(hex: &str) -> Option<String> {
    static HEX: OnceLock<Regex> = OnceLock::new();
    let hex_re = HEX.get_or_init(|| Regex::new(r"^[0-9A-Fa-f]{6}$").expect("static regex"));

    let stripped = hex.trim_start_matches('#');
    if hex_re.is_match(stripped) {
        Some(format!("#{}", stripped.to_uppercase()))
    } else {
        tracing::warn!(hex = hex, "invalid brand hex color");
        None
    }
}

/// Convert a brand title to a PascalCase component name:
/// `.NET` → `DotNet`, `C++` → `CPlusPlus`, `Adobe After Effects` →
/// `AdobeAfterEffects`.
fn title_to_pascal(title: &str) -> String {
    static STRIP: OnceLock<Regex> = OnceLock::new();
    let strip_re = STRIP.get_or_init(|| Regex::new(r"[^a-zA-Z0-9\s]").expect("static regex"));

    let mut result = title.to_string();
    for (symbol, word) in [(".", "Dot"), ("+", "Plus"), ("&", "And"), ("#", "Sharp"), ("@", "At")]
    {
        result = result.replace(symbol, &format!(" {word} "));
    }
    let result = strip_re.replace_all(&result, "");

    result
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                // Capitalize: uppercase head, lowercase tail (NET -> Net).
                Some(first) if first.is_alphabetic() => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                Some(_) => word.to_string(),
                None => String::new(),
            }
        })
        .collect()
}

/// Search tags: lowercase title words, "also known as" aliases, and the
/// standing `brand`/`logo` pair. Sorted and deduplicated.
fn brand_tags(meta: &BrandMeta) -> Vec<String> {
    let mut tags: std::collections::BTreeSet<String> =
        meta.title.to_lowercase().split_whitespace().map(str::to_string).collect();
    tags.insert("brand".to_string());
    tags.insert("logo".to_string());

    if let Some(aliases) = &meta.aliases {
        for alias in &aliases.aka {
            tags.extend(alias.to_lowercase().split_whitespace().map(str::to_string));
        }
    }

    tags.into_iter().collect()
}

impl Extractor for SimpleIconsExtractor {
    fn library(&self) -> Library {
        Library::SimpleIcons
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

        let metadata = self.load_metadata()?;
        let files = sorted_files(&self.icons_dir, ".svg")?;
        tracing::info!(
            count = files.len(),
            metadata = metadata.len(),
            "found simple-icons brand logos"
        );

        let mut icons = Vec::with_capacity(files.len());
        for file in &files {
            let slug = file_stem(file);
            let Some(meta) = metadata.get(&slug) else {
                tracing::warn!(slug = %slug, "no metadata for brand icon");
                continue;
            };
            match self.extract_one(file, meta) {
                Ok(icon) => icons.push(icon),
                Err(e) => {
                    tracing::warn!(file = %file.display(), error = %e, "failed to extract icon");
                }
            }
        }
        Ok(icons)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_with_symbols_become_words() {
        assert_eq!(title_to_pascal(".NET"), "DotNet");
        assert_eq!(title_to_pascal("C++"), "CPlusPlus");
        assert_eq!(title_to_pascal("Adobe After Effects"), "AdobeAfterEffects");
        assert_eq!(title_to_pascal("1Password"), "1Password");
    }

    #[test]
    fn hex_colors_are_normalized() {
        assert_eq!(validate_hex_color("00add8").as_deref(), Some("#00ADD8"));
        assert_eq!(validate_hex_color("#FF0000").as_deref(), Some("#FF0000"));
        assert_eq!(validate_hex_color("red"), None);
        assert_eq!(validate_hex_color("fff"), None);
    }

    #[test]
    fn brand_tags_include_aliases() {
        let meta = BrandMeta {
            title: "Visual Studio Code".to_string(),
            slug: "visualstudiocode".to_string(),
            hex: None,
            aliases: Some(BrandAliases {
                aka: vec!["VS Code".to_string()],
            }),
        };
        let tags = brand_tags(&meta);
        for expected in ["brand", "logo", "visual", "studio", "code", "vs"] {
            assert!(tags.contains(&expected.to_string()), "missing {expected}");
        }
    }
}

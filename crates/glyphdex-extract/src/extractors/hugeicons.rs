//! HugeIcons extractor: `hugeicons-react/dist/esm/icons/*_icon.js`.
//!
//! The package ships compiled React components, not SVG files, so the
//! icon name and element array are pulled out of the JS text with
//! regexes: `r("IconName", [["path",{d:"...",key:"k0"}], ...])`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use glyphdex_core::errors::ExtractError;
use glyphdex_core::types::{ExtractedIcon, Library, SvgElement};

use crate::extractors::{sorted_files, Extractor};
use crate::manifest::read_package_version;
use crate::naming::to_kebab;
use crate::taxonomy::{guess_category, split_tags, CategoryTable};

const CATEGORIES: CategoryTable = &[
    ("arrows", &["arrow", "chevron", "direction", "left", "right", "up", "down"]),
    (
        "media",
        &["play", "pause", "stop", "volume", "mic", "video", "music", "camera", "record"],
    ),
    ("files", &["file", "folder", "document", "copy", "clipboard"]),
    ("communication", &["mail", "message", "phone", "send", "chat", "comment"]),
    ("weather", &["sun", "moon", "cloud", "rain", "snow", "weather"]),
    (
        "devices",
        &["monitor", "laptop", "tablet", "mobile", "printer", "computer"],
    ),
    ("social", &["share", "heart", "like", "star", "bookmark", "thumb"]),
    ("navigation", &["home", "menu", "search", "filter", "grid", "list"]),
    ("editing", &["edit", "pen", "pencil", "scissors", "crop", "brush"]),
    ("shapes", &["circle", "square", "triangle", "hexagon"]),
    ("users", &["user", "person", "account", "profile", "team"]),
];

pub struct HugeIconsExtractor {
    package_dir: PathBuf,
    icons_dir: PathBuf,
}

impl HugeIconsExtractor {
    pub fn new(vendor_dir: &Path) -> Self {
        let package_dir = vendor_dir.join("hugeicons-react");
        let icons_dir = package_dir.join("dist").join("esm").join("icons");
        Self {
            package_dir,
            icons_dir,
        }
    }

    fn extract_from_js(&self, path: &Path) -> Result<ExtractedIcon, ExtractError> {
        static NAME: OnceLock<Regex> = OnceLock::new();
        let name_re = NAME.get_or_init(|| Regex::new(r#"r\("(\w+)""#).expect("static regex"));

        let content = std::fs::read_to_string(path).map_err(|e| ExtractError::ReadFailed {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let pascal_name = name_re
            .captures(&content)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim_end_matches("Icon").to_string())
            .ok_or_else(|| ExtractError::MalformedAsset {
                path: path.display().to_string(),
                message: "no component name found".to_string(),
            })?;
        let normalized_name = to_kebab(&pascal_name);

        let elements = parse_elements(&content);
        if elements.is_empty() {
            return Err(ExtractError::MalformedAsset {
                path: path.display().to_string(),
                message: "no svg elements found".to_string(),
            });
        }

        let svg_content = build_svg_content(&elements);
        let is_stroke = elements.iter().any(|e| e.attrs.contains_key("stroke"));

        Ok(ExtractedIcon {
            library: Library::HugeIcons,
            name: pascal_name,
            normalized_name: normalized_name.clone(),
            view_box: "0 0 24 24".to_string(),
            content: svg_content,
            path_data: elements,
            default_stroke: is_stroke,
            default_fill: !is_stroke,
            stroke_width: Some("1.5".to_string()),
            category: Some(guess_category(&normalized_name, CATEGORIES)),
            tags: split_tags(&normalized_name),
            variant: None,
            brand_color: None,
        })
    }
}

/// Pull `["tag",{key:"value",...}]` element definitions out of the
/// compiled component source.
fn parse_elements(content: &str) -> Vec<SvgElement> {
    static ELEMENT: OnceLock<Regex> = OnceLock::new();
    static ATTR: OnceLock<Regex> = OnceLock::new();
    let element_re =
        ELEMENT.get_or_init(|| Regex::new(r#"\["(\w+)",\{([^}]+)\}"#).expect("static regex"));
    let attr_re =
        ATTR.get_or_init(|| Regex::new(r#"(\w+):\s*["']([^"']*)["']"#).expect("static regex"));

    let mut elements = Vec::new();
    for caps in element_re.captures_iter(content) {
        let tag = caps[1].to_string();
        let mut attrs = BTreeMap::new();
        for attr in attr_re.captures_iter(&caps[2]) {
            let key = attr[1].to_string();
            // React list keys are not SVG attributes.
            if key != "key" {
                attrs.insert(key, attr[2].to_string());
            }
        }
        elements.push(SvgElement { tag, attrs });
    }
    elements
}

/// Rebuild inner SVG markup from the parsed elements.
fn build_svg_content(elements: &[SvgElement]) -> String {
    let mut out = String::new();
    for element in elements {
        out.push('<');
        out.push_str(&element.tag);
        for (key, value) in &element.attrs {
            out.push_str(&format!(" {key}=\"{value}\""));
        }
        out.push_str("/>");
    }
    out
}

impl Extractor for HugeIconsExtractor {
    fn library(&self) -> Library {
        Library::HugeIcons
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

        let files = sorted_files(&self.icons_dir, "_icon.js")?;
        tracing::info!(count = files.len(), "found hugeicons component files");

        let mut icons = Vec::with_capacity(files.len());
        for file in &files {
            match self.extract_from_js(file) {
                Ok(icon) => icons.push(icon),
                Err(e) => {
                    tracing::warn!(file = %file.display(), error = %e, "failed to extract icon");
                }
            }
        }
        Ok(icons)
    }
}

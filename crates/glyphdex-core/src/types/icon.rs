//! The uniform icon record every extractor produces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Library;

/// One drawable SVG element (path, circle, rect, ...) with its attributes.
///
/// Attributes live in a `BTreeMap` so serialized JSON is byte-stable.
/// Path data is kept as an opaque string; glyphdex never interprets
/// geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SvgElement {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
}

/// An icon extracted from any source package, normalized to the common
/// schema. Variants (e.g. Phosphor weights) are full records with
/// `variant` set; they are stored in the `variants` table against their
/// base icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedIcon {
    pub library: Library,
    /// PascalCase component name, e.g. `ArrowLeft`.
    pub name: String,
    /// Lowercase hyphen-delimited name, e.g. `arrow-left`. Unique within
    /// a library for base icons by construction of the icon id.
    pub normalized_name: String,
    pub view_box: String,
    /// Inner SVG markup (everything between the `<svg>` tags).
    pub content: String,
    pub path_data: Vec<SvgElement>,
    pub default_stroke: bool,
    pub default_fill: bool,
    pub stroke_width: Option<String>,
    pub category: Option<String>,
    pub tags: Vec<String>,
    /// Weight/style variant, e.g. Phosphor `bold`. `None` for base icons.
    pub variant: Option<String>,
    /// Brand hex color (with `#`), Simple Icons only.
    pub brand_color: Option<String>,
}

impl ExtractedIcon {
    /// Stable id of the base icon: `"{library}:{normalized_name}"`.
    pub fn icon_id(&self) -> String {
        format!("{}:{}", self.library.id(), self.normalized_name)
    }

    /// Stable id of a variant row: `"{library}:{normalized_name}:{variant}"`.
    /// `None` for base icons.
    pub fn variant_id(&self) -> Option<String> {
        self.variant
            .as_deref()
            .map(|v| format!("{}:{}:{}", self.library.id(), self.normalized_name, v))
    }

    pub fn is_variant(&self) -> bool {
        self.variant.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(variant: Option<&str>) -> ExtractedIcon {
        ExtractedIcon {
            library: Library::Phosphor,
            name: "ArrowLeft".to_string(),
            normalized_name: "arrow-left".to_string(),
            view_box: "0 0 256 256".to_string(),
            content: "<path d=\"M0 0\"/>".to_string(),
            path_data: vec![],
            default_stroke: false,
            default_fill: true,
            stroke_width: None,
            category: None,
            tags: vec![],
            variant: variant.map(str::to_string),
            brand_color: None,
        }
    }

    #[test]
    fn base_icon_id() {
        let icon = icon(None);
        assert_eq!(icon.icon_id(), "phosphor:arrow-left");
        assert_eq!(icon.variant_id(), None);
        assert!(!icon.is_variant());
    }

    #[test]
    fn variant_id_includes_weight() {
        let icon = icon(Some("bold"));
        assert_eq!(icon.icon_id(), "phosphor:arrow-left");
        assert_eq!(
            icon.variant_id().as_deref(),
            Some("phosphor:arrow-left:bold")
        );
        assert!(icon.is_variant());
    }

    #[test]
    fn svg_element_attrs_serialize_in_key_order() {
        let mut attrs = BTreeMap::new();
        attrs.insert("stroke".to_string(), "currentColor".to_string());
        attrs.insert("d".to_string(), "M1 2".to_string());
        let el = SvgElement {
            tag: "path".to_string(),
            attrs,
        };
        let json = serde_json::to_string(&el).unwrap();
        assert_eq!(
            json,
            r#"{"tag":"path","attrs":{"d":"M1 2","stroke":"currentColor"}}"#
        );
    }
}

//! SVG asset parsing with quick-xml.
//!
//! Collects the root `<svg>` attributes, the drawable child elements,
//! and a re-serialized copy of the inner markup. Path data stays an
//! opaque string — glyphdex never interprets geometry.

use std::collections::BTreeMap;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use glyphdex_core::errors::ExtractError;
use glyphdex_core::types::SvgElement;

/// Element tags considered drawable content.
const DRAWABLE_TAGS: [&str; 7] = [
    "path", "circle", "rect", "line", "polyline", "polygon", "ellipse",
];

/// A parsed SVG asset.
#[derive(Debug, Clone, Default)]
pub struct ParsedSvg {
    pub view_box: Option<String>,
    pub stroke_width: Option<String>,
    /// Inner markup, everything between the `<svg>` tags.
    pub content: String,
    /// Drawable elements in document order.
    pub elements: Vec<SvgElement>,
}

/// Parse an SVG document. `label` names the asset in error messages.
pub fn parse_svg(input: &str, label: &str) -> Result<ParsedSvg, ExtractError> {
    let mut reader = Reader::from_str(input);
    let mut parsed = ParsedSvg::default();
    let mut inside_svg = false;
    let mut depth = 0usize;

    loop {
        let event = reader.read_event().map_err(|e| ExtractError::MalformedAsset {
            path: label.to_string(),
            message: e.to_string(),
        })?;

        match event {
            Event::Start(ref e) if !inside_svg && e.name().as_ref() == b"svg" => {
                inside_svg = true;
                let attrs = read_attrs(e, label)?;
                parsed.view_box = attrs.get("viewBox").cloned();
                parsed.stroke_width = attrs.get("stroke-width").cloned();
            }
            Event::Start(ref e) if inside_svg => {
                depth += 1;
                let attrs = read_attrs(e, label)?;
                let tag = tag_name(e, label)?;
                parsed.content.push_str(&open_tag(&tag, e, label, false)?);
                record_element(&mut parsed, &tag, attrs);
            }
            Event::Empty(ref e) if inside_svg => {
                let attrs = read_attrs(e, label)?;
                let tag = tag_name(e, label)?;
                parsed.content.push_str(&open_tag(&tag, e, label, true)?);
                record_element(&mut parsed, &tag, attrs);
            }
            Event::End(ref e) if inside_svg => {
                if depth == 0 {
                    // Closing </svg>.
                    return Ok(parsed);
                }
                depth -= 1;
                let tag = std::str::from_utf8(e.name().as_ref())
                    .map_err(|e| ExtractError::MalformedAsset {
                        path: label.to_string(),
                        message: e.to_string(),
                    })?
                    .to_string();
                parsed.content.push_str(&format!("</{tag}>"));
            }
            Event::Text(ref t) if inside_svg => {
                let text = t.unescape().map_err(|e| ExtractError::MalformedAsset {
                    path: label.to_string(),
                    message: e.to_string(),
                })?;
                if !text.trim().is_empty() {
                    parsed.content.push_str(text.trim());
                }
            }
            Event::Eof => {
                if inside_svg {
                    return Ok(parsed);
                }
                return Err(ExtractError::MalformedAsset {
                    path: label.to_string(),
                    message: "no <svg> element found".to_string(),
                });
            }
            _ => {}
        }
    }
}

fn record_element(parsed: &mut ParsedSvg, tag: &str, attrs: BTreeMap<String, String>) {
    if DRAWABLE_TAGS.contains(&tag) {
        parsed.elements.push(SvgElement {
            tag: tag.to_string(),
            attrs,
        });
    }
}

fn tag_name(e: &BytesStart<'_>, label: &str) -> Result<String, ExtractError> {
    std::str::from_utf8(e.name().as_ref())
        .map(str::to_string)
        .map_err(|e| ExtractError::MalformedAsset {
            path: label.to_string(),
            message: e.to_string(),
        })
}

fn read_attrs(e: &BytesStart<'_>, label: &str) -> Result<BTreeMap<String, String>, ExtractError> {
    let mut attrs = BTreeMap::new();
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ExtractError::MalformedAsset {
            path: label.to_string(),
            message: e.to_string(),
        })?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| ExtractError::MalformedAsset {
                path: label.to_string(),
                message: e.to_string(),
            })?
            .to_string();
        let value = attr
            .unescape_value()
            .map_err(|e| ExtractError::MalformedAsset {
                path: label.to_string(),
                message: e.to_string(),
            })?
            .into_owned();
        attrs.insert(key, value);
    }
    Ok(attrs)
}

/// Re-serialize an opening tag with attributes in document order.
fn open_tag(
    tag: &str,
    e: &BytesStart<'_>,
    label: &str,
    self_closing: bool,
) -> Result<String, ExtractError> {
    let mut out = format!("<{tag}");
    for attr in e.attributes() {
        let attr = attr.map_err(|e| ExtractError::MalformedAsset {
            path: label.to_string(),
            message: e.to_string(),
        })?;
        let key = std::str::from_utf8(attr.key.as_ref())
            .map_err(|e| ExtractError::MalformedAsset {
                path: label.to_string(),
                message: e.to_string(),
            })?;
        let value = attr
            .unescape_value()
            .map_err(|e| ExtractError::MalformedAsset {
                path: label.to_string(),
                message: e.to_string(),
            })?;
        out.push_str(&format!(" {key}=\"{value}\""));
    }
    out.push_str(if self_closing { "/>" } else { ">" });
    Ok(out)
}

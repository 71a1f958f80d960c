//! Extractor integration tests over synthetic vendor trees.

use std::fs;
use std::path::Path;

use glyphdex_core::errors::ExtractError;
use glyphdex_core::types::Library;
use glyphdex_extract::extractors::{
    Extractor, FeatherExtractor, HeroiconsExtractor, HugeIconsExtractor, LucideExtractor,
    PhosphorExtractor, SimpleIconsExtractor,
};
use glyphdex_extract::{load_library, registry};
use glyphdex_storage::queries::{icons, sources};
use glyphdex_storage::Database;

const STROKE_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2"><path d="M3 10l9-7 9 7"/></svg>"#;

const FILL_SVG_256: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 256 256"><path d="M128 24a104 104 0 1 0 0 208"/></svg>"#;

fn write(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn package_json(dir: &Path, name: &str, version: &str) {
    write(
        &dir.join("package.json"),
        &format!(r#"{{"name": "{name}", "version": "{version}"}}"#),
    );
}

#[test]
fn lucide_extracts_sorted_stroke_icons() {
    let vendor = tempfile::tempdir().unwrap();
    let package = vendor.path().join("lucide-static");
    package_json(&package, "lucide-static", "0.544.0");
    write(&package.join("icons/home.svg"), STROKE_SVG);
    write(&package.join("icons/arrow-left.svg"), STROKE_SVG);

    let extractor = LucideExtractor::new(vendor.path());
    assert_eq!(extractor.version(), "0.544.0");

    let icons = extractor.extract_all().unwrap();
    let names: Vec<&str> = icons.iter().map(|i| i.normalized_name.as_str()).collect();
    // Sorted by file name for reproducible output order.
    assert_eq!(names, ["arrow-left", "home"]);

    let home = &icons[1];
    assert_eq!(home.name, "Home");
    assert_eq!(home.view_box, "0 0 24 24");
    assert_eq!(home.stroke_width.as_deref(), Some("2"));
    assert!(home.default_stroke);
    assert!(!home.default_fill);
    assert_eq!(home.category.as_deref(), Some("navigation"));
    assert!(home.tags.contains(&"house".to_string()));
    assert_eq!(home.content, r#"<path d="M3 10l9-7 9 7"/>"#);
}

#[test]
fn lucide_missing_package_is_an_error() {
    let vendor = tempfile::tempdir().unwrap();
    let err = LucideExtractor::new(vendor.path()).extract_all().unwrap_err();
    assert!(matches!(err, ExtractError::PackageNotFound { .. }));
}

#[test]
fn lucide_broken_asset_is_skipped() {
    let vendor = tempfile::tempdir().unwrap();
    let package = vendor.path().join("lucide-static");
    write(&package.join("icons/good.svg"), STROKE_SVG);
    write(&package.join("icons/broken.svg"), "<div>no svg here</div>");

    let icons = LucideExtractor::new(vendor.path()).extract_all().unwrap();
    assert_eq!(icons.len(), 1);
    assert_eq!(icons[0].normalized_name, "good");
}

#[test]
fn feather_extracts_from_dist() {
    let vendor = tempfile::tempdir().unwrap();
    let package = vendor.path().join("feather-icons");
    package_json(&package, "feather-icons", "4.29.0");
    write(&package.join("dist/icons/home.svg"), STROKE_SVG);

    let icons = FeatherExtractor::new(vendor.path()).extract_all().unwrap();
    assert_eq!(icons.len(), 1);
    assert_eq!(icons[0].library, Library::Feather);
    assert_eq!(icons[0].category.as_deref(), Some("navigation"));
    assert_eq!(icons[0].tags, ["home"]);
}

#[test]
fn phosphor_strips_weight_suffix_and_drops_orphans() {
    let vendor = tempfile::tempdir().unwrap();
    let package = vendor.path().join("@phosphor-icons/core");
    package_json(&package, "@phosphor-icons/core", "2.1.0");
    write(&package.join("assets/regular/arrow-left.svg"), FILL_SVG_256);
    write(&package.join("assets/bold/arrow-left-bold.svg"), FILL_SVG_256);
    // Variant with no base icon must be skipped.
    write(&package.join("assets/bold/ghost-bold.svg"), FILL_SVG_256);

    let icons = PhosphorExtractor::new(vendor.path()).extract_all().unwrap();
    assert_eq!(icons.len(), 2);

    let base = &icons[0];
    assert_eq!(base.normalized_name, "arrow-left");
    assert_eq!(base.variant, None);
    assert_eq!(base.view_box, "0 0 256 256");
    assert!(base.default_fill);
    assert_eq!(base.stroke_width, None);
    assert_eq!(base.category.as_deref(), Some("arrows"));

    let variant = &icons[1];
    assert_eq!(variant.normalized_name, "arrow-left");
    assert_eq!(variant.variant.as_deref(), Some("bold"));
    assert_eq!(variant.variant_id().as_deref(), Some("phosphor:arrow-left:bold"));
}

#[test]
fn heroicons_folds_style_into_the_name() {
    let vendor = tempfile::tempdir().unwrap();
    let package = vendor.path().join("heroicons");
    package_json(&package, "heroicons", "2.2.0");
    write(&package.join("24/outline/bell.svg"), STROKE_SVG);
    write(&package.join("24/solid/bell.svg"), FILL_SVG_256);

    let icons = HeroiconsExtractor::new(vendor.path()).extract_all().unwrap();
    let names: Vec<&str> = icons.iter().map(|i| i.normalized_name.as_str()).collect();
    assert_eq!(names, ["bell-outline", "bell-solid"]);

    assert!(icons[0].default_stroke);
    assert_eq!(icons[0].stroke_width.as_deref(), Some("1.5"));
    assert!(icons[1].default_fill);
    assert_eq!(icons[1].stroke_width, None);
    // Both are distinct icons, not variants.
    assert!(icons.iter().all(|i| i.variant.is_none()));
}

#[test]
fn hugeicons_parses_compiled_components() {
    let vendor = tempfile::tempdir().unwrap();
    let package = vendor.path().join("hugeicons-react");
    package_json(&package, "hugeicons-react", "0.3.0");
    write(
        &package.join("dist/esm/icons/home_01_icon.js"),
        r#"import r from "../create-hugeicon-component.js";
const Home01Icon = r("Home01Icon", [["path",{d:"M12 3l9 7v11h-6v-7H9v7H3V10z",stroke:"currentColor",key:"k0"}]]);
export default Home01Icon;
"#,
    );

    let icons = HugeIconsExtractor::new(vendor.path()).extract_all().unwrap();
    assert_eq!(icons.len(), 1);

    let icon = &icons[0];
    assert_eq!(icon.name, "Home01");
    assert_eq!(icon.normalized_name, "home01");
    assert!(icon.default_stroke, "stroke attribute implies stroke-based");
    assert_eq!(icon.stroke_width.as_deref(), Some("1.5"));
    assert_eq!(icon.path_data.len(), 1);
    assert_eq!(icon.path_data[0].tag, "path");
    assert!(!icon.path_data[0].attrs.contains_key("key"));
    assert_eq!(
        icon.content,
        r#"<path d="M12 3l9 7v11h-6v-7H9v7H3V10z" stroke="currentColor"/>"#
    );
}

#[test]
fn hugeicons_unparsable_component_is_skipped() {
    let vendor = tempfile::tempdir().unwrap();
    let package = vendor.path().join("hugeicons-react");
    write(
        &package.join("dist/esm/icons/broken_icon.js"),
        "export default undefined;",
    );

    let icons = HugeIconsExtractor::new(vendor.path()).extract_all().unwrap();
    assert!(icons.is_empty());
}

#[test]
fn simple_icons_joins_svg_with_metadata() {
    let vendor = tempfile::tempdir().unwrap();
    let package = vendor.path().join("simple-icons");
    package_json(&package, "simple-icons", "13.0.0");
    write(
        &package.join("data/simple-icons.json"),
        r#"[
            {"title": "Rust", "slug": "rust", "hex": "000000"},
            {"title": ".NET", "slug": "dotnet", "hex": "512BD4", "aliases": {"aka": ["dot net"]}}
        ]"#,
    );
    write(&package.join("icons/rust.svg"), FILL_SVG_256);
    write(&package.join("icons/dotnet.svg"), FILL_SVG_256);
    // SVG without metadata is skipped.
    write(&package.join("icons/mystery.svg"), FILL_SVG_256);

    let icons = SimpleIconsExtractor::new(vendor.path()).extract_all().unwrap();
    let names: Vec<&str> = icons.iter().map(|i| i.normalized_name.as_str()).collect();
    assert_eq!(names, ["dotnet", "rust"]);

    let dotnet = &icons[0];
    assert_eq!(dotnet.name, "DotNet");
    assert_eq!(dotnet.brand_color.as_deref(), Some("#512BD4"));
    assert_eq!(dotnet.category.as_deref(), Some("brands"));
    assert!(dotnet.tags.contains(&"logo".to_string()));
    assert!(dotnet.tags.contains(&"net".to_string()));
}

#[test]
fn load_library_registers_source_and_inserts_icons() {
    let vendor = tempfile::tempdir().unwrap();
    let package = vendor.path().join("@phosphor-icons/core");
    package_json(&package, "@phosphor-icons/core", "2.1.0");
    write(&package.join("assets/regular/arrow-left.svg"), FILL_SVG_256);
    write(&package.join("assets/regular/heart.svg"), FILL_SVG_256);
    write(&package.join("assets/bold/heart-bold.svg"), FILL_SVG_256);

    let db = Database::open_in_memory().unwrap();
    let extractor = PhosphorExtractor::new(vendor.path());
    let summary = load_library(&db, &extractor).unwrap();

    assert_eq!(summary.base_icons, 2);
    assert_eq!(summary.variants, 1);
    assert_eq!(summary.inserted, 3);
    assert_eq!(summary.insert_errors, 0);

    let all = sources::list_sources(db.conn()).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].id, "phosphor");
    assert_eq!(all[0].version, "2.1.0");
    assert_eq!(all[0].total_icons, 2);

    assert_eq!(sources::icon_count(db.conn(), Some(Library::Phosphor)).unwrap(), 2);
    assert_eq!(icons::variant_count(db.conn(), Library::Phosphor).unwrap(), 1);

    let index = icons::load_name_index(db.conn(), Library::Phosphor).unwrap();
    let names: Vec<&str> = index.names().collect();
    assert_eq!(names, ["arrow-left", "heart"]);
}

#[test]
fn load_summary_default_is_zeroed() {
    let summary = registry::LoadSummary::default();
    assert_eq!(summary.inserted, 0);
    assert_eq!(summary.insert_errors, 0);
}

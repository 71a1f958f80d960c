//! Icon name conversions between kebab-case and PascalCase.

use std::sync::OnceLock;

use regex::Regex;

/// Convert kebab-case to PascalCase: `arrow-left` → `ArrowLeft`.
pub fn to_pascal(kebab: &str) -> String {
    kebab
        .split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}

/// Convert PascalCase to kebab-case: `ArrowLeft01` → `arrow-left01`.
pub fn to_kebab(pascal: &str) -> String {
    static ACRONYM_BOUNDARY: OnceLock<Regex> = OnceLock::new();
    static WORD_BOUNDARY: OnceLock<Regex> = OnceLock::new();

    let acronym = ACRONYM_BOUNDARY
        .get_or_init(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("static regex"));
    let word =
        WORD_BOUNDARY.get_or_init(|| Regex::new(r"([a-z0-9])([A-Z])").expect("static regex"));

    let step1 = acronym.replace_all(pascal, "$1-$2");
    word.replace_all(&step1, "$1-$2").to_lowercase()
}

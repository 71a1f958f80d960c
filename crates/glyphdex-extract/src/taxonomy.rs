//! Name-based category guessing and tag generation.
//!
//! Every extractor carries its own keyword and synonym tables — the
//! vendors name the same concepts differently (Lucide `search`, Phosphor
//! `magnifying-glass`). The matching logic is shared here.

use std::collections::BTreeSet;
use std::sync::OnceLock;

use regex::Regex;

/// A category and the name keywords that imply it.
pub type CategoryTable = &'static [(&'static str, &'static [&'static str])];

/// A name word (or hyphenated phrase) and its search synonyms.
pub type SynonymTable = &'static [(&'static str, &'static [&'static str])];

/// Guess a category from name keywords; `general` when nothing matches.
pub fn guess_category(name: &str, table: CategoryTable) -> String {
    let lower = name.to_lowercase();
    for (category, keywords) in table {
        if keywords.iter().any(|kw| lower.contains(kw)) {
            return (*category).to_string();
        }
    }
    "general".to_string()
}

/// Generate search tags from a kebab-case name plus a synonym table.
///
/// Tags are the name's words extended with the synonyms of any matching
/// word. Hyphenated synonym keys (`magnifying-glass`) match against the
/// whole name. Output is deduplicated and sorted so stored tag JSON is
/// deterministic.
pub fn name_tags(name: &str, synonyms: SynonymTable) -> Vec<String> {
    let words: Vec<&str> = name.split('-').filter(|w| !w.is_empty()).collect();
    let mut tags: BTreeSet<String> = words.iter().map(|w| w.to_string()).collect();

    for (key, syns) in synonyms {
        let matched = if key.contains('-') {
            name.contains(key)
        } else {
            words.contains(key)
        };
        if matched {
            tags.extend(syns.iter().map(|s| s.to_string()));
        }
    }

    tags.into_iter().collect()
}

/// Split a name into bare word tags on hyphens, underscores, and digit
/// runs. Deduplicated and sorted.
pub fn split_tags(name: &str) -> Vec<String> {
    static SEPARATORS: OnceLock<Regex> = OnceLock::new();
    let separators = SEPARATORS.get_or_init(|| Regex::new(r"[-_]|\d+").expect("static regex"));

    let tags: BTreeSet<String> = separators
        .split(name)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect();
    tags.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATEGORIES: CategoryTable = &[
        ("arrows", &["arrow", "chevron"]),
        ("navigation", &["home", "menu", "search"]),
    ];

    const SYNONYMS: SynonymTable = &[
        ("home", &["house", "main", "start"]),
        ("magnifying-glass", &["search", "find", "lookup"]),
    ];

    #[test]
    fn category_from_keyword() {
        assert_eq!(guess_category("arrow-left", CATEGORIES), "arrows");
        assert_eq!(guess_category("home", CATEGORIES), "navigation");
    }

    #[test]
    fn first_matching_category_wins() {
        // "arrow-home" hits both tables; arrows is listed first.
        assert_eq!(guess_category("arrow-home", CATEGORIES), "arrows");
    }

    #[test]
    fn unmatched_names_are_general() {
        assert_eq!(guess_category("banana", CATEGORIES), "general");
    }

    #[test]
    fn tags_include_words_and_synonyms() {
        let tags = name_tags("home", SYNONYMS);
        assert_eq!(tags, ["home", "house", "main", "start"]);
    }

    #[test]
    fn hyphenated_synonym_keys_match_whole_name() {
        let tags = name_tags("magnifying-glass-plus", SYNONYMS);
        assert!(tags.contains(&"search".to_string()));
        assert!(tags.contains(&"plus".to_string()));
    }

    #[test]
    fn tags_are_sorted_and_unique() {
        let tags = name_tags("home-home", SYNONYMS);
        assert_eq!(tags, ["home", "house", "main", "start"]);
    }

    #[test]
    fn split_tags_drops_digits_and_separators() {
        assert_eq!(split_tags("arrow_left-01"), ["arrow", "left"]);
    }
}

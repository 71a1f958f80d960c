//! Normalized similarity scoring between icon names.

use strsim::normalized_levenshtein;

/// Similarity score between two names in [0, 100].
///
/// 100 means identical, 0 maximally dissimilar. Normalized Levenshtein
/// scaled to an integer: symmetric, deterministic, and monotonic under
/// character-level edit distance. The acceptance threshold
/// (`DEFAULT_CONFIDENCE_THRESHOLD`) is calibrated against this scorer.
pub fn similarity(a: &str, b: &str) -> u8 {
    (normalized_levenshtein(a, b) * 100.0).round() as u8
}

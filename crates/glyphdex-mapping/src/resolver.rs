//! Best-match selection over an ordered candidate pool.

use crate::similarity::similarity;

/// The winning candidate of a best-match scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BestMatch<'a> {
    pub candidate: &'a str,
    pub score: u8,
}

/// Find the single highest-scoring candidate for `query`.
///
/// Candidates are scanned in input order and ties break to the FIRST
/// candidate reaching the maximum score — the comparison is strictly
/// greater-than, which makes mapping runs reproducible for any fixed
/// pool order. Returns `None` for an empty pool (the library has no
/// data; not an error).
pub fn find_best<'a, I>(query: &str, candidates: I) -> Option<BestMatch<'a>>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<BestMatch<'a>> = None;
    for candidate in candidates {
        let score = similarity(query, candidate);
        if best.map_or(true, |b| score > b.score) {
            best = Some(BestMatch { candidate, score });
        }
    }
    best
}

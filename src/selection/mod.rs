//! Keyboard selection cycling and fuzzy candidate ranking.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Suggestion lists shown by the widgets are capped to keep menus scannable.
pub const MAX_SUGGESTIONS: usize = 9;

/// Next index, wrapping past the end. `len == 0` is a no-op.
pub fn next_index(active: usize, len: usize) -> usize {
    if len == 0 {
        return active;
    }
    (active + 1) % len
}

/// Previous index, wrapping past the start. `len == 0` is a no-op.
pub fn prev_index(active: usize, len: usize) -> usize {
    if len == 0 {
        return active;
    }
    (active + len - 1) % len
}

/// Candidates matching `query` as an ordered (not necessarily contiguous)
/// character subsequence, best score first; ties keep pool order. An empty
/// query matches nothing.
pub fn fuzzy_rank(query: &str, candidates: &[String]) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let matcher = SkimMatcherV2::default();
    let mut scored: Vec<(i64, &String)> = candidates
        .iter()
        .filter_map(|c| matcher.fuzzy_match(c, query).map(|score| (score, c)))
        .collect();
    // Stable sort keeps pool order among equal scores.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.into_iter().map(|(_, c)| c.clone()).collect()
}

/// [`fuzzy_rank`] truncated to [`MAX_SUGGESTIONS`].
pub fn fuzzy_filter(query: &str, candidates: &[String]) -> Vec<String> {
    let mut ranked = fuzzy_rank(query, candidates);
    ranked.truncate(MAX_SUGGESTIONS);
    ranked
}

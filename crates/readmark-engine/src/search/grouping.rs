use crate::span::Span;

use super::matcher::SearchMatch;

/// Partitions matches by block bounds.
///
/// Returns one list per bound, in the same order. A match `(ms, me)` belongs
/// to bound `(s, e)` when `ms >= s && me < e`. The end test is strict, so a
/// match ending exactly on a block's end, or straddling two blocks, belongs
/// to no block and is never highlighted. Matches keep their relative order.
pub fn group_by_bounds(matches: &[SearchMatch], bounds: &[Span]) -> Vec<Vec<SearchMatch>> {
    bounds
        .iter()
        .map(|b| {
            matches
                .iter()
                .filter(|m| m.start >= b.start && m.end < b.end)
                .copied()
                .collect()
        })
        .collect()
}

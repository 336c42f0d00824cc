use crate::{
    blocks::{Block, bounds_of},
    plain_text::to_plain_text,
    span::Span,
};

use super::{
    grouping::group_by_bounds,
    matcher::{SearchMatch, SearchOptions, find_matches},
};

/// The focused match located inside its block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusedMatch {
    /// Index of the block containing the match.
    pub block: usize,
    /// The match relative to that block's offset.
    pub local: SearchMatch,
}

/// Results of one query over one article, with a focused match for
/// next/previous navigation.
///
/// A session is rebuilt from scratch for every query change: the plain text
/// is re-extracted and re-scanned. Callers typing a query should debounce.
#[derive(Debug, Clone)]
pub struct SearchSession {
    query: String,
    matches: Vec<SearchMatch>,
    bounds: Vec<Span>,
    focused: Option<usize>,
}

impl SearchSession {
    /// Searches `blocks` for `query`. The first match, if any, is focused.
    pub fn new(blocks: &[Block], query: &str, options: SearchOptions) -> Self {
        let corpus = to_plain_text(blocks);
        let matches = find_matches(&corpus, query, options);
        log::debug!("query {:?} matched {} times", query, matches.len());
        Self {
            query: query.to_string(),
            focused: (!matches.is_empty()).then_some(0),
            matches,
            bounds: bounds_of(blocks),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// All matches in corpus coordinates, in document order.
    pub fn matches(&self) -> &[SearchMatch] {
        &self.matches
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.focused
    }

    pub fn focused(&self) -> Option<SearchMatch> {
        self.focused.map(|i| self.matches[i])
    }

    /// Moves focus to the next match, wrapping to the first.
    pub fn focus_next(&mut self) -> Option<SearchMatch> {
        let n = self.matches.len();
        self.focused = self.focused.map(|i| (i + 1) % n);
        self.focused()
    }

    /// Moves focus to the previous match, wrapping to the last.
    pub fn focus_previous(&mut self) -> Option<SearchMatch> {
        let n = self.matches.len();
        self.focused = self.focused.map(|i| (i + n - 1) % n);
        self.focused()
    }

    /// Focuses match `index`. Out-of-range indexes leave focus unchanged.
    pub fn focus(&mut self, index: usize) -> Option<SearchMatch> {
        if index < self.matches.len() {
            self.focused = Some(index);
        }
        self.focused()
    }

    /// Per-block highlight intervals, relative to each block's offset.
    pub fn block_highlights(&self) -> Vec<Vec<SearchMatch>> {
        group_by_bounds(&self.matches, &self.bounds)
            .into_iter()
            .zip(&self.bounds)
            .map(|(group, b)| group.into_iter().map(|m| m.local_to(b.start)).collect())
            .collect()
    }

    /// The block holding the focused match, under the same rule as
    /// [`group_by_bounds`]. `None` when nothing is focused or the focused
    /// match straddles a block end.
    pub fn focused_in_block(&self) -> Option<FocusedMatch> {
        let m = self.focused()?;
        self.bounds
            .iter()
            .position(|b| m.start >= b.start && m.end < b.end)
            .map(|block| FocusedMatch {
                block,
                local: m.local_to(self.bounds[block].start),
            })
    }
}

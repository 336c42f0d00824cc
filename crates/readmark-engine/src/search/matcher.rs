use serde::Serialize;

use crate::span::Span;

/// Search settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub case_sensitive: bool,
}

/// A half-open character interval `[start, end)` into the plain-text corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SearchMatch {
    pub start: usize,
    pub end: usize,
}

impl SearchMatch {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn span(self) -> Span {
        Span::new(self.start, self.end)
    }

    /// The same interval relative to a block starting at `offset`.
    pub fn local_to(self, offset: usize) -> Self {
        let span = self.span().local_to(offset);
        Self::new(span.start, span.end)
    }
}

/// Finds every non-overlapping occurrence of `query` in `corpus`, left to
/// right, as character offsets.
///
/// An empty query finds nothing.
pub fn find_matches(corpus: &str, query: &str, options: SearchOptions) -> Vec<SearchMatch> {
    let needle: Vec<char> = query.chars().collect();
    if needle.is_empty() {
        return vec![];
    }
    let hay: Vec<char> = corpus.chars().collect();

    let eq = |a: char, b: char| {
        a == b || (!options.case_sensitive && a.to_lowercase().eq(b.to_lowercase()))
    };

    let mut out = vec![];
    let mut i = 0;
    while i + needle.len() <= hay.len() {
        if hay[i..i + needle.len()]
            .iter()
            .zip(&needle)
            .all(|(&a, &b)| eq(a, b))
        {
            out.push(SearchMatch::new(i, i + needle.len()));
            i += needle.len();
        } else {
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_query_finds_nothing() {
        assert!(find_matches("anything", "", SearchOptions::default()).is_empty());
    }

    #[test]
    fn query_longer_than_corpus() {
        assert!(find_matches("ab", "abc", SearchOptions::default()).is_empty());
    }

    #[rstest]
    #[case("the cat sat on the mat", "at", vec![(5, 7), (9, 11), (20, 22)])]
    #[case("aaaa", "aa", vec![(0, 2), (2, 4)])]
    #[case("Rust rust RUST", "rust", vec![(0, 4), (5, 9), (10, 14)])]
    #[case("çé ÇÉ", "çé", vec![(0, 2), (3, 5)])]
    fn case_insensitive_by_default(
        #[case] corpus: &str,
        #[case] query: &str,
        #[case] expected: Vec<(usize, usize)>,
    ) {
        let found: Vec<_> = find_matches(corpus, query, SearchOptions::default())
            .into_iter()
            .map(|m| (m.start, m.end))
            .collect();
        assert_eq!(found, expected);
    }

    #[test]
    fn case_sensitive_option() {
        let opts = SearchOptions {
            case_sensitive: true,
        };
        assert_eq!(
            find_matches("Rust rust", "rust", opts),
            vec![SearchMatch::new(5, 9)]
        );
    }

    #[test]
    fn offsets_are_characters_not_bytes() {
        let found = find_matches("ééx", "x", SearchOptions::default());
        assert_eq!(found, vec![SearchMatch::new(2, 3)]);
    }
}

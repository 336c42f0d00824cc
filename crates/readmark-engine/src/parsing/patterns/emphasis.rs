//! Emphasis and strikethrough.
//!
//! A delimiter run only counts when the character before it and the character
//! after it are not the same delimiter. That keeps `**bold**` from reading as
//! nested italics and makes `***text***` plain text. The content must be
//! non-empty and stay on one line; the first valid closing run wins.

use std::ops::Range;

use super::{ConstructKind, ConstructMatch, Recognizer};
use crate::parsing::cursor::Cursor;

/// A delimiter character repeated `width` times.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub byte: u8,
    pub width: usize,
}

impl Delimiter {
    pub const STAR: Delimiter = Delimiter::new(b'*', 1);
    pub const UNDERSCORE: Delimiter = Delimiter::new(b'_', 1);
    pub const DOUBLE_STAR: Delimiter = Delimiter::new(b'*', 2);
    pub const DOUBLE_UNDERSCORE: Delimiter = Delimiter::new(b'_', 2);
    pub const DOUBLE_TILDE: Delimiter = Delimiter::new(b'~', 2);

    pub const fn new(byte: u8, width: usize) -> Self {
        Self { byte, width }
    }

    fn run_at(&self, cur: &Cursor<'_>) -> bool {
        (0..self.width).all(|k| cur.peek_at(k) == Some(self.byte))
    }

    fn opens(&self, cur: &Cursor<'_>) -> bool {
        self.run_at(cur)
            && cur.prev() != Some(self.byte)
            && matches!(cur.peek_at(self.width), Some(b) if b != self.byte && b != b'\n')
    }

    fn closes(&self, cur: &Cursor<'_>) -> bool {
        self.run_at(cur)
            && cur.prev() != Some(self.byte)
            && cur.peek_at(self.width) != Some(self.byte)
    }

    /// Finds the first delimited span starting at or after `from`.
    ///
    /// Returns `(full, inner)` byte ranges.
    pub fn find_at(&self, text: &str, from: usize) -> Option<(Range<usize>, Range<usize>)> {
        let mut cur = Cursor::at(text, from);
        while !cur.eof() {
            if self.opens(&cur) {
                let inner_start = cur.i + self.width;
                if let Some(close) = self.find_close(text, inner_start) {
                    return Some((cur.i..close + self.width, inner_start..close));
                }
            }
            cur.bump();
        }
        None
    }

    fn find_close(&self, text: &str, inner_start: usize) -> Option<usize> {
        // The first content byte was checked by `opens`.
        let mut cur = Cursor::at(text, inner_start);
        cur.bump();
        while let Some(b) = cur.peek() {
            if b == b'\n' {
                return None;
            }
            if self.closes(&cur) {
                return Some(cur.i);
            }
            cur.bump();
        }
        None
    }
}

/// Recognizes one emphasis construct with a single delimiter.
///
/// Constructs with two delimiters get one rule each, so the scanner caches
/// each delimiter's next hit on its own.
pub struct EmphasisRule {
    kind: ConstructKind,
    delimiter: Delimiter,
}

impl EmphasisRule {
    pub fn new(kind: ConstructKind, delimiter: Delimiter) -> Self {
        Self { kind, delimiter }
    }
}

impl Recognizer for EmphasisRule {
    fn kind(&self) -> ConstructKind {
        self.kind
    }

    fn find_at(&self, text: &str, from: usize) -> Option<ConstructMatch> {
        self.delimiter
            .find_at(text, from)
            .map(|(full, inner)| ConstructMatch {
                kind: self.kind,
                full,
                inner,
                marker: None,
            })
    }
}

/// Emphasis recognizers in priority order.
pub fn recognizers() -> Vec<EmphasisRule> {
    vec![
        EmphasisRule::new(ConstructKind::Italic, Delimiter::STAR),
        EmphasisRule::new(ConstructKind::Italic, Delimiter::UNDERSCORE),
        EmphasisRule::new(ConstructKind::Bold, Delimiter::DOUBLE_STAR),
        EmphasisRule::new(ConstructKind::Bold, Delimiter::DOUBLE_UNDERSCORE),
        EmphasisRule::new(ConstructKind::Strike, Delimiter::DOUBLE_TILDE),
    ]
}

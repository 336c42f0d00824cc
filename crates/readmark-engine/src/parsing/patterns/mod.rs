//! # Pattern Table
//!
//! One recognizer per markdown construct, combined into a single prioritized
//! matcher.
//!
//! ## Matching rules
//!
//! - Line-anchored constructs (list items, headers, quotes, rules) only match
//!   at the start of a line. Everything else matches anywhere.
//! - The combined matcher returns the leftmost match across all recognizers.
//!   When two recognizers match at the same position the one declared first
//!   wins.
//!
//! ## Modules
//!
//! - **`line`**: regex recognizers for line-anchored constructs
//! - **`emphasis`**: cursor scanners for `*`, `_`, `**`, `__` and `~~` runs
//! - **`inline`**: regex recognizers for code, links, images and fenced code,
//!   plus the secondary field extraction for links and images
//! - **`regex_rule`**: the shared regex-backed [`Recognizer`]

pub mod emphasis;
pub mod inline;
pub mod line;
pub mod regex_rule;

use std::ops::Range;
use std::sync::OnceLock;

/// The constructs the pattern table recognizes, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstructKind {
    UnorderedListItem,
    OrderedListItem,
    Header,
    Quote,
    Rule,
    Italic,
    Bold,
    Strike,
    InlineCode,
    Link,
    Image,
    BlockCode,
}

impl ConstructKind {
    /// Whether the construct only matches at the start of a line.
    pub fn is_line_anchored(self) -> bool {
        matches!(
            self,
            ConstructKind::UnorderedListItem
                | ConstructKind::OrderedListItem
                | ConstructKind::Header
                | ConstructKind::Quote
                | ConstructKind::Rule
        )
    }

    /// Whether the stripped inner text is parsed again for children.
    pub fn recurses(self) -> bool {
        matches!(
            self,
            ConstructKind::Quote
                | ConstructKind::Bold
                | ConstructKind::Italic
                | ConstructKind::Strike
                | ConstructKind::UnorderedListItem
                | ConstructKind::OrderedListItem
        )
    }
}

/// A construct found in the text. All ranges are byte ranges into the text
/// that was scanned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructMatch {
    pub kind: ConstructKind,
    /// The whole match including delimiters.
    pub full: Range<usize>,
    /// The delimiter-stripped content.
    pub inner: Range<usize>,
    /// Kind-specific prefix: header hashes, list numeral, fence info string.
    pub marker: Option<Range<usize>>,
}

/// Finds the next occurrence of one construct.
pub trait Recognizer: Send + Sync {
    fn kind(&self) -> ConstructKind;

    /// Returns the leftmost match starting at or after byte `from`.
    ///
    /// Look-behind and line anchors see the whole of `text`, not just the
    /// part after `from`.
    fn find_at(&self, text: &str, from: usize) -> Option<ConstructMatch>;
}

/// The ordered set of recognizers. Stateless once built; share it by
/// reference.
pub struct PatternTable {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl PatternTable {
    pub fn new() -> Self {
        let mut recognizers: Vec<Box<dyn Recognizer>> = Vec::new();
        for r in line::recognizers() {
            recognizers.push(Box::new(r));
        }
        for r in emphasis::recognizers() {
            recognizers.push(Box::new(r));
        }
        for r in inline::recognizers() {
            recognizers.push(Box::new(r));
        }
        Self { recognizers }
    }

    /// The process-wide table, compiled on first use.
    pub fn shared() -> &'static PatternTable {
        static TABLE: OnceLock<PatternTable> = OnceLock::new();
        TABLE.get_or_init(PatternTable::new)
    }

    /// Construct kinds in priority order.
    pub fn kinds(&self) -> Vec<ConstructKind> {
        self.recognizers.iter().map(|r| r.kind()).collect()
    }

    /// Returns the next leftmost match at or after `from`.
    pub fn find_next(&self, text: &str, from: usize) -> Option<ConstructMatch> {
        self.scanner(text).next_match(from)
    }

    /// Starts a forward scan over `text` that remembers each recognizer's
    /// last result between calls.
    pub fn scanner<'t, 's>(&'t self, text: &'s str) -> Scanner<'t, 's> {
        Scanner {
            table: self,
            text,
            slots: self.recognizers.iter().map(|_| Slot::Pending).collect(),
        }
    }
}

impl Default for PatternTable {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
enum Slot {
    Pending,
    Exhausted,
    Found(ConstructMatch),
}

/// Forward scan state for one text.
///
/// A recognizer's match is only recomputed once the scan position has moved
/// past its start; until then it is still the leftmost match for that
/// recognizer. A recognizer that found nothing stays exhausted.
pub struct Scanner<'t, 's> {
    table: &'t PatternTable,
    text: &'s str,
    slots: Vec<Slot>,
}

impl Scanner<'_, '_> {
    /// Returns the leftmost, highest-priority match at or after `from`.
    ///
    /// `from` must not decrease between calls.
    pub fn next_match(&mut self, from: usize) -> Option<ConstructMatch> {
        for (slot, recognizer) in self.slots.iter_mut().zip(&self.table.recognizers) {
            let stale = match slot {
                Slot::Pending => true,
                Slot::Exhausted => false,
                Slot::Found(m) => m.full.start < from,
            };
            if stale {
                *slot = match recognizer.find_at(self.text, from) {
                    Some(m) => Slot::Found(m),
                    None => Slot::Exhausted,
                };
            }
        }

        // min_by_key keeps the first of equal keys, i.e. declaration order.
        self.slots
            .iter()
            .filter_map(|slot| match slot {
                Slot::Found(m) => Some(m),
                _ => None,
            })
            .min_by_key(|m| m.full.start)
            .cloned()
    }
}

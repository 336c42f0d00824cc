use regex::Regex;

use super::{ConstructKind, ConstructMatch, Recognizer};

/// Capture group holding the delimiter-stripped content.
pub const INNER: &str = "inner";
/// Capture group holding the kind-specific marker (hashes, numeral, info string).
pub const MARKER: &str = "marker";

/// A recognizer backed by one regex.
///
/// The content is taken from the `inner` group when the pattern declares one
/// (an optional `inner` group that did not participate yields empty content);
/// otherwise the whole match is the content and a secondary extraction is
/// expected to pull out the fields.
pub struct RegexRule {
    kind: ConstructKind,
    regex: Regex,
    has_inner: bool,
}

impl RegexRule {
    /// Compiles `pattern`. Patterns are compile-time constants, so a failure
    /// here is a bug in this crate.
    pub fn new(kind: ConstructKind, pattern: &str) -> Self {
        let regex = Regex::new(pattern)
            .unwrap_or_else(|e| panic!("{kind:?} pattern should always compile: {e}"));
        let has_inner = regex.capture_names().any(|name| name == Some(INNER));
        Self {
            kind,
            regex,
            has_inner,
        }
    }
}

impl Recognizer for RegexRule {
    fn kind(&self) -> ConstructKind {
        self.kind
    }

    fn find_at(&self, text: &str, from: usize) -> Option<ConstructMatch> {
        let caps = self.regex.captures_at(text, from)?;
        let full = caps.get(0)?.range();
        let inner = if self.has_inner {
            caps.name(INNER)
                .map_or(full.end..full.end, |m| m.range())
        } else {
            full.clone()
        };
        Some(ConstructMatch {
            kind: self.kind,
            full,
            inner,
            marker: caps.name(MARKER).map(|m| m.range()),
        })
    }
}

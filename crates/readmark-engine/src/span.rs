use serde::Serialize;

/// A character range `[start, end)` into rendered plain text.
///
/// Offsets count Unicode scalar values, not bytes, so they line up with what
/// a renderer shows regardless of how the source was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in characters. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Shifts the span left by `offset`, clamping at zero.
    #[must_use]
    pub fn local_to(self, offset: usize) -> Self {
        Self {
            start: self.start.saturating_sub(offset),
            end: self.end.saturating_sub(offset),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn len_and_empty() {
        assert_eq!(Span::new(3, 8).len(), 5);
        assert!(Span::new(4, 4).is_empty());
        assert!(Span::new(9, 2).is_empty());
    }

    #[test]
    fn local_to_subtracts_offset() {
        assert_eq!(Span::new(12, 15).local_to(10), Span::new(2, 5));
        assert_eq!(Span::new(1, 3).local_to(10), Span::new(0, 0));
    }
}

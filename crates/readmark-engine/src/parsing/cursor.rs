/// A byte cursor over a line of markdown with one byte of look-behind.
///
/// Delimiters scanned with it are all ASCII, so comparing raw bytes never
/// splits a multi-byte character.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The full text being scanned (look-behind may reach before `i`).
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned at byte `i` of `s`.
    pub fn at(s: &'a str, i: usize) -> Self {
        Self { s, i }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Peeks `n` bytes ahead of the current one.
    pub fn peek_at(&self, n: usize) -> Option<u8> {
        self.s.as_bytes().get(self.i + n).copied()
    }

    /// The byte just before the cursor, if any.
    pub fn prev(&self) -> Option<u8> {
        self.i
            .checked_sub(1)
            .and_then(|p| self.s.as_bytes().get(p).copied())
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.i += 1;
        Some(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::at("hello", 0);
        assert!(!cur.eof());
        assert_eq!(cur.prev(), None);
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.prev(), Some(b'h'));
        assert_eq!(cur.i, 1);
    }

    #[test]
    fn look_behind_reaches_before_start_position() {
        let cur = Cursor::at("a*b", 1);
        assert_eq!(cur.prev(), Some(b'a'));
        assert_eq!(cur.peek(), Some(b'*'));
        assert_eq!(cur.peek_at(1), Some(b'b'));
        assert_eq!(cur.peek_at(2), None);
    }

    #[test]
    fn peeking_past_end_is_none() {
        let cur = Cursor::at("hi", 2);
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.peek_at(5), None);
        assert_eq!(cur.prev(), Some(b'i'));
    }

    #[test]
    fn bump_at_eof_returns_none() {
        let mut cur = Cursor::at("x", 0);
        assert_eq!(cur.bump(), Some(b'x'));
        assert_eq!(cur.bump(), None);
        assert_eq!(cur.bump(), None);
    }
}

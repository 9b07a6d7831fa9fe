//! Byte cursor for traversing source text.
//!
//! The cursor keeps three pieces of state: the index of the byte under
//! examination, the lookahead index one past it, and the byte itself. A zero
//! byte stands for "past the end of input". All three are updated together
//! by [`Cursor::advance`], so `read_position == position + 1` always holds.

/// Sentinel byte reported once the cursor has run off the end of the input.
pub const EOF_CHAR: u8 = 0;

/// A forward-only cursor over a source string.
///
/// # Example
///
/// ```
/// use wiig_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let");
/// assert_eq!(cursor.current(), b'l');
/// assert_eq!(cursor.peek(), b'e');
/// cursor.advance();
/// assert_eq!(cursor.current(), b'e');
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    input: &'a str,

    /// Index of the current byte.
    position: usize,

    /// Index of the lookahead byte.
    read_position: usize,

    /// The current byte, or [`EOF_CHAR`] past the end.
    ch: u8,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor with the first byte already loaded.
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            position: 0,
            read_position: 1,
            ch: input.as_bytes().first().copied().unwrap_or(EOF_CHAR),
        }
    }

    /// Returns the byte under the cursor.
    #[inline]
    pub fn current(&self) -> u8 {
        self.ch
    }

    /// Returns the byte after the current one without moving.
    ///
    /// Yields [`EOF_CHAR`] when the lookahead is out of bounds.
    ///
    /// ```
    /// use wiig_lex::cursor::{Cursor, EOF_CHAR};
    ///
    /// let cursor = Cursor::new("!=");
    /// assert_eq!(cursor.peek(), b'=');
    ///
    /// let cursor = Cursor::new("!");
    /// assert_eq!(cursor.peek(), EOF_CHAR);
    /// ```
    #[inline]
    pub fn peek(&self) -> u8 {
        self.input
            .as_bytes()
            .get(self.read_position)
            .copied()
            .unwrap_or(EOF_CHAR)
    }

    /// Moves one byte forward.
    ///
    /// Does nothing once the end of input has been reached, which keeps the
    /// end state absorbing.
    #[inline]
    pub fn advance(&mut self) {
        if self.is_at_end() {
            return;
        }
        self.ch = self.peek();
        self.position = self.read_position;
        self.read_position += 1;
    }

    /// Advances while `predicate` holds for the current byte.
    pub fn advance_while(&mut self, mut predicate: impl FnMut(u8) -> bool) {
        while !self.is_at_end() && predicate(self.ch) {
            self.advance();
        }
    }

    /// Returns true once every byte has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    /// Returns the index of the current byte.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source text from `start` up to the current position.
    ///
    /// `start` must be a position this cursor previously reported.
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.position]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_loads_first_byte() {
        let cursor = Cursor::new("abc");
        assert_eq!(cursor.current(), b'a');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.peek(), b'b');
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.current(), EOF_CHAR);
        assert_eq!(cursor.peek(), EOF_CHAR);
        cursor.advance();
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_advance_to_end() {
        let mut cursor = Cursor::new("ab");
        cursor.advance();
        assert_eq!(cursor.current(), b'b');
        assert_eq!(cursor.peek(), EOF_CHAR);
        cursor.advance();
        assert_eq!(cursor.current(), EOF_CHAR);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_advance_past_end_is_noop() {
        let mut cursor = Cursor::new("a");
        cursor.advance();
        cursor.advance();
        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current(), EOF_CHAR);
    }

    #[test]
    fn test_lookahead_tracks_position() {
        let mut cursor = Cursor::new("let x");
        for _ in 0..10 {
            assert_eq!(cursor.read_position, cursor.position + 1);
            cursor.advance();
        }
    }

    #[test]
    fn test_peek_does_not_move() {
        let cursor = Cursor::new("==");
        assert_eq!(cursor.peek(), b'=');
        assert_eq!(cursor.peek(), b'=');
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.current(), b'=');
    }

    #[test]
    fn test_advance_while_and_slice() {
        let mut cursor = Cursor::new("abc123");
        let start = cursor.position();
        cursor.advance_while(|b| b.is_ascii_alphabetic());
        assert_eq!(cursor.slice_from(start), "abc");
        assert_eq!(cursor.current(), b'1');
    }

    #[test]
    fn test_advance_while_stops_at_end() {
        let mut cursor = Cursor::new("aaa");
        cursor.advance_while(|_| true);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.slice_from(0), "aaa");
    }
}

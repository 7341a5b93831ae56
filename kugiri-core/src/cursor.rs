//! Bidirectional text cursor
//!
//! Positions are UTF-8 byte offsets into the borrowed buffer and always sit on
//! a character boundary. Each code point is one step, whatever its width.

/// A movable position over a borrowed text buffer
#[derive(Debug, Clone)]
pub struct TextCursor<'a> {
    text: &'a str,
    index: usize,
}

impl<'a> TextCursor<'a> {
    /// Create a cursor at the start of `text`
    pub fn new(text: &'a str) -> Self {
        Self { text, index: 0 }
    }

    /// The full underlying buffer
    pub fn text(&self) -> &'a str {
        self.text
    }

    /// Current byte offset
    pub fn index(&self) -> usize {
        self.index
    }

    /// Offset one past the last character
    pub fn end_index(&self) -> usize {
        self.text.len()
    }

    /// Move to `index`.
    ///
    /// # Panics
    ///
    /// If `index` is past the end or not on a character boundary.
    pub fn set_index(&mut self, index: usize) {
        assert!(
            self.text.is_char_boundary(index),
            "cursor index {index} is not a character boundary of a {}-byte buffer",
            self.text.len()
        );
        self.index = index;
    }

    /// Character at the cursor, `None` at the end
    pub fn current(&self) -> Option<char> {
        self.text[self.index..].chars().next()
    }

    /// Step forward one character and return the new current character
    pub fn move_next(&mut self) -> Option<char> {
        if let Some(ch) = self.current() {
            self.index += ch.len_utf8();
        }
        self.current()
    }

    /// Step back one character and return it, `None` at the start
    pub fn move_previous(&mut self) -> Option<char> {
        let ch = self.text[..self.index].chars().next_back()?;
        self.index -= ch.len_utf8();
        Some(ch)
    }

    /// Collect the characters from the cursor up to `end`, leaving the cursor
    /// at `end`.
    ///
    /// # Panics
    ///
    /// If `end` is past the end or not on a character boundary.
    pub fn drain_to(&mut self, end: usize) -> String {
        assert!(
            self.text.is_char_boundary(end),
            "drain end {end} is not a character boundary of a {}-byte buffer",
            self.text.len()
        );
        let mut out = String::with_capacity(end.saturating_sub(self.index));
        while self.index < end {
            match self.current() {
                Some(ch) => {
                    out.push(ch);
                    self.index += ch.len_utf8();
                }
                None => break,
            }
        }
        out
    }
}

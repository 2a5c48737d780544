//! Line cursor
//!
//! An editor-style cursor over a single line. Lexers read from the current
//! position, advance it, and the text between the token start and the
//! current position becomes the emitted token.

/// Cursor over one line of text (without its line terminator)
#[derive(Debug, Clone)]
pub struct LineCursor<'a> {
    line: &'a str,
    /// Start of the token being scanned
    start: usize,
    /// Current byte position
    pos: usize,
}

impl<'a> LineCursor<'a> {
    /// Create a cursor at the start of a line
    pub fn new(line: &'a str) -> Self {
        Self { line, start: 0, pos: 0 }
    }

    /// The whole line
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Current byte position
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Start of the current token
    pub fn start(&self) -> usize {
        self.start
    }

    /// Check if the cursor is at the end of the line
    pub fn eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Text not yet consumed
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// Text consumed since the current token started
    pub fn current(&self) -> &'a str {
        &self.line[self.start..self.pos]
    }

    /// Begin a new token at the current position
    pub fn begin_token(&mut self) {
        self.start = self.pos;
    }

    /// Peek at the next character
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character
    pub fn next_char(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Move forward to a byte position
    ///
    /// Never moves backward; clamped to the line and rounded up to a
    /// character boundary.
    pub fn advance_to(&mut self, pos: usize) {
        let mut pos = pos.clamp(self.pos, self.line.len());
        while !self.line.is_char_boundary(pos) {
            pos += 1;
        }
        self.pos = pos;
    }

    /// Consume the rest of the line
    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Force progress when a lexer consumed nothing
    ///
    /// Returns true if the cursor had stalled and was moved one character.
    pub fn bump_if_stalled(&mut self) -> bool {
        if self.pos == self.start && !self.eol() {
            self.next_char();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_window() {
        let mut cursor = LineCursor::new("abc def");
        cursor.begin_token();
        cursor.advance_to(3);
        assert_eq!(cursor.current(), "abc");
        assert_eq!(cursor.rest(), " def");

        cursor.begin_token();
        cursor.skip_to_end();
        assert_eq!(cursor.current(), " def");
        assert!(cursor.eol());
    }

    #[test]
    fn test_advance_never_moves_back() {
        let mut cursor = LineCursor::new("abcdef");
        cursor.advance_to(4);
        cursor.advance_to(2);
        assert_eq!(cursor.pos(), 4);
        cursor.advance_to(100);
        assert_eq!(cursor.pos(), 6);
    }

    #[test]
    fn test_advance_rounds_to_char_boundary() {
        let mut cursor = LineCursor::new("aé");
        cursor.advance_to(2);
        assert_eq!(cursor.pos(), 3);
        assert_eq!(cursor.current(), "aé");
    }

    #[test]
    fn test_next_char() {
        let mut cursor = LineCursor::new("é!");
        assert_eq!(cursor.next_char(), Some('é'));
        assert_eq!(cursor.next_char(), Some('!'));
        assert_eq!(cursor.next_char(), None);
    }

    #[test]
    fn test_bump_if_stalled() {
        let mut cursor = LineCursor::new("xy");
        cursor.begin_token();
        assert!(cursor.bump_if_stalled());
        assert_eq!(cursor.current(), "x");
        assert!(!cursor.bump_if_stalled());

        let mut empty = LineCursor::new("");
        assert!(!empty.bump_if_stalled());
    }
}

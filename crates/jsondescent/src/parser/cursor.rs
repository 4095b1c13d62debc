//! Cursor: the parser's read position over a fully buffered source.
//!
//! The cursor borrows the source text and owns the only mutable state of a
//! parse: the byte offset of the next unread character, plus the line and
//! column counters used for error reporting.
//!
//! Invariants
//! - `0 <= pos <= source.len()`, and `pos` always sits on a char boundary.
//! - `pos` only moves forward.
//! - `line`/`col` are 1-based and describe the character at `pos`.

#[derive(Debug, Clone)]
pub(crate) struct Cursor<'src> {
    source: &'src str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    /// Returns the next character without consuming it, or `None` at the end
    /// of input.
    #[inline]
    pub(crate) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consumes one character.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    /// Consumes characters while `pred` holds and returns the consumed run.
    pub(crate) fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) -> &'src str {
        let start = self.pos;
        while self.peek().is_some_and(&mut pred) {
            self.bump();
        }
        &self.source[start..self.pos]
    }

    /// Consumes `text` if the unread input starts with it.
    pub(crate) fn eat_str(&mut self, text: &str) -> bool {
        if !self.rest().starts_with(text) {
            return false;
        }
        for _ in text.chars() {
            self.bump();
        }
        true
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub(crate) fn offset(&self) -> usize {
        self.pos
    }

    pub(crate) fn line(&self) -> usize {
        self.line
    }

    pub(crate) fn column(&self) -> usize {
        self.col
    }

    fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn peek_does_not_advance() {
        let c = Cursor::new("ab");
        assert_eq!(c.peek(), Some('a'));
        assert_eq!(c.peek(), Some('a'));
        assert_eq!(c.offset(), 0);
    }

    #[test]
    fn bump_tracks_lines_and_columns() {
        let mut c = Cursor::new("a\nbc");
        assert_eq!((c.line(), c.column()), (1, 1));
        c.bump();
        c.bump();
        assert_eq!((c.line(), c.column()), (2, 1));
        c.bump();
        assert_eq!((c.line(), c.column(), c.offset()), (2, 2, 3));
    }

    #[test]
    fn end_of_input_is_none() {
        let mut c = Cursor::new("x");
        assert_eq!(c.bump(), Some('x'));
        assert!(c.is_at_end());
        assert_eq!(c.peek(), None);
        assert_eq!(c.bump(), None);
        assert_eq!(c.offset(), 1);
    }

    #[test]
    fn eat_while_returns_run() {
        let mut c = Cursor::new("12345,");
        assert_eq!(c.eat_while(|ch| ch.is_ascii_digit()), "12345");
        assert_eq!(c.peek(), Some(','));
        assert_eq!(c.eat_while(|ch| ch.is_ascii_digit()), "");
        assert_eq!(c.offset(), 5);
    }

    #[test]
    fn multibyte_characters_count_as_one_column() {
        let mut c = Cursor::new("é!");
        assert_eq!(c.bump(), Some('é'));
        assert_eq!((c.offset(), c.column()), (2, 2));
        assert_eq!(c.peek(), Some('!'));
    }

    #[test]
    fn eat_str_only_on_full_match() {
        let mut c = Cursor::new("tru");
        assert!(!c.eat_str("true"));
        assert_eq!(c.offset(), 0);
        let mut c = Cursor::new("null]");
        assert!(c.eat_str("null"));
        assert_eq!(c.peek(), Some(']'));
    }
}

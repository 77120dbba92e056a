//! Source cursor
//!
//!     A char-indexed reader over a source string. The lexer peeks ahead through the cursor
//!     to decide how long the next token is, then asks the cursor to consume that many chars
//!     as a token of a given kind.
//!
//!     The cursor owns all position bookkeeping: byte span, 0-based line number, 1-based
//!     column and the indentation of the current line. The lexer itself is stateless.

use crate::loose::token::{Token, TokenKind};

pub struct Cursor<'a> {
    source: &'a str,
    // Byte offset and char, one entry per char of the source.
    chars: Vec<(usize, char)>,
    index: usize,
    line_number: usize,
    char_number: usize,
    indent: usize,
}

impl<'a> Cursor<'a> {
    /// Returned by [`Cursor::peek_char`] past the end of the input.
    pub const EOF: char = '\0';

    pub fn new(source: &'a str) -> Cursor<'a> {
        Cursor {
            source,
            chars: source.char_indices().collect(),
            index: 0,
            line_number: 0,
            char_number: 1,
            indent: 0,
        }
    }

    pub fn finished(&self) -> bool {
        self.index >= self.chars.len()
    }

    pub fn peek_char(&self, lookahead: usize) -> char {
        self.chars
            .get(self.index + lookahead)
            .map(|&(_, c)| c)
            .unwrap_or(Self::EOF)
    }

    pub fn advance(&mut self, distance: usize) {
        self.index += distance;
    }

    /// Current position as a byte offset into the source.
    pub fn position(&self) -> usize {
        self.byte_offset(self.index)
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn char_number(&self) -> usize {
        self.char_number
    }

    pub fn indent(&self) -> usize {
        self.indent
    }

    fn byte_offset(&self, index: usize) -> usize {
        self.chars
            .get(index)
            .map(|&(offset, _)| offset)
            .unwrap_or(self.source.len())
    }

    /// Consume `length` chars as a token of `kind`.
    pub fn consume(&mut self, kind: TokenKind, length: usize, save_text: bool) -> Token {
        if self.char_number == 1 && kind == TokenKind::Whitespace {
            self.indent = length;
        }

        let start = self.position();
        self.advance(length);
        let end = self.position();

        let token = Token {
            kind,
            span: start..end,
            line_number: self.line_number,
            char_number: self.char_number,
            indent: self.indent,
            text: save_text.then(|| self.source[start..end].to_string()),
        };

        self.char_number += length;

        if kind == TokenKind::Newline {
            self.line_number += 1;
            self.char_number = 1;
            self.indent = 0;
        }

        token
    }

    /// Consume the current char plus every following char matching `predicate`.
    pub fn consume_while(
        &mut self,
        kind: TokenKind,
        mut predicate: impl FnMut(char) -> bool,
    ) -> Token {
        let mut lookahead = 1;
        while self.peek_char(lookahead) != Self::EOF && predicate(self.peek_char(lookahead)) {
            lookahead += 1;
        }
        self.consume(kind, lookahead, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peek_past_end_is_eof() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek_char(0), 'a');
        assert_eq!(cursor.peek_char(1), 'b');
        assert_eq!(cursor.peek_char(2), Cursor::EOF);
        assert_eq!(cursor.peek_char(100), Cursor::EOF);
    }

    #[test]
    fn test_finished() {
        let mut cursor = Cursor::new("x");
        assert!(!cursor.finished());
        cursor.advance(1);
        assert!(cursor.finished());
        assert!(Cursor::new("").finished());
    }

    #[test]
    fn test_consume_records_span_and_text() {
        let mut cursor = Cursor::new("hello world");
        let token = cursor.consume(TokenKind::Identifier, 5, true);
        assert_eq!(token.span, 0..5);
        assert_eq!(token.text.as_deref(), Some("hello"));
        assert_eq!(token.char_number, 1);
        assert_eq!(cursor.char_number(), 6);

        let token = cursor.consume(TokenKind::Whitespace, 1, false);
        assert_eq!(token.span, 5..6);
        assert_eq!(token.text, None);
        assert_eq!(token.char_number, 6);
    }

    #[test]
    fn test_newline_resets_column_and_indent() {
        let mut cursor = Cursor::new("  a\nb");
        let ws = cursor.consume(TokenKind::Whitespace, 2, true);
        assert_eq!(ws.indent, 2);
        let a = cursor.consume(TokenKind::Identifier, 1, true);
        assert_eq!(a.indent, 2);
        assert_eq!(a.char_number, 3);
        let newline = cursor.consume(TokenKind::Newline, 1, false);
        assert_eq!(newline.line_number, 0);
        assert_eq!(cursor.line_number(), 1);
        assert_eq!(cursor.char_number(), 1);
        assert_eq!(cursor.indent(), 0);
        let b = cursor.consume(TokenKind::Identifier, 1, true);
        assert_eq!(b.line_number, 1);
        assert_eq!(b.char_number, 1);
        assert_eq!(b.indent, 0);
    }

    #[test]
    fn test_whitespace_mid_line_keeps_indent() {
        let mut cursor = Cursor::new("a  b");
        cursor.consume(TokenKind::Identifier, 1, true);
        let ws = cursor.consume(TokenKind::Whitespace, 2, true);
        assert_eq!(ws.indent, 0);
    }

    #[test]
    fn test_consume_while_stops_at_predicate() {
        let mut cursor = Cursor::new("//note\nrest");
        let token = cursor.consume_while(TokenKind::LineComment, |c| c != '\n');
        assert_eq!(token.text.as_deref(), Some("//note"));
        assert_eq!(cursor.peek_char(0), '\n');
    }

    #[test]
    fn test_consume_while_stops_at_eof() {
        let mut cursor = Cursor::new("//tail");
        let token = cursor.consume_while(TokenKind::LineComment, |_| true);
        assert_eq!(token.span, 0..6);
        assert!(cursor.finished());
    }

    #[test]
    fn test_spans_are_byte_offsets() {
        let mut cursor = Cursor::new("é!");
        let first = cursor.consume(TokenKind::Unrecognized, 1, true);
        assert_eq!(first.span, 0..2);
        assert_eq!(first.text.as_deref(), Some("é"));
        let second = cursor.consume(TokenKind::Unrecognized, 1, true);
        assert_eq!(second.span, 2..3);
        assert_eq!(second.char_number, 2);
    }
}

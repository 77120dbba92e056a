//! Token reader
//!
//!     A pull stream over the lexer with a single token of lookahead. Good for one-pass
//!     consumption such as dumping every token of a file; the parser, which needs to look
//!     further ahead, works on a materialized [`TokenStream`] instead.
//!
//! [`TokenStream`]: crate::loose::parsing::TokenStream

use super::base_tokenization::next_token;
use super::cursor::Cursor;
use crate::loose::token::Token;

pub struct TokenReader<'a> {
    cursor: Cursor<'a>,
    next: Option<Token>,
}

impl<'a> TokenReader<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut reader = TokenReader {
            cursor: Cursor::new(source),
            next: None,
        };
        reader.fill();
        reader
    }

    fn fill(&mut self) {
        self.next = if self.cursor.finished() {
            None
        } else {
            Some(next_token(&mut self.cursor))
        };
    }

    pub fn finished(&self) -> bool {
        self.next.is_none()
    }

    pub fn peek(&self) -> Option<&Token> {
        self.next.as_ref()
    }

    pub fn consume(&mut self) -> Option<Token> {
        let token = self.next.take();
        self.fill();
        token
    }
}

impl Iterator for TokenReader<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        self.consume()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loose::token::TokenKind;

    #[test]
    fn test_peek_then_consume() {
        let mut reader = TokenReader::new("f(x)");
        assert!(!reader.finished());
        assert_eq!(reader.peek().map(|t| t.kind), Some(TokenKind::Identifier));

        let first = reader.consume().unwrap();
        assert_eq!(first.text.as_deref(), Some("f"));
        assert_eq!(reader.peek().map(|t| t.kind), Some(TokenKind::LeftParen));
    }

    #[test]
    fn test_finishes_after_last_token() {
        let mut reader = TokenReader::new("a b");
        assert_eq!(reader.by_ref().count(), 3);
        assert!(reader.finished());
        assert!(reader.peek().is_none());
        assert!(reader.consume().is_none());
    }

    #[test]
    fn test_empty_source_is_finished() {
        let reader = TokenReader::new("");
        assert!(reader.finished());
    }
}

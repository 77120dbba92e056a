//! Token stream
//!
//!     A materialized token list with lookahead to any depth. Looking past the end never
//!     fails; it yields an end-of-stream sentinel instead, so grammar rules can peek freely
//!     without bounds checks.

use super::error::ParseError;
use crate::loose::token::{Token, TokenKind};

pub struct TokenStream {
    tokens: Vec<Token>,
    index: usize,
    end_of_stream: Token,
}

impl TokenStream {
    pub fn new(tokens: Vec<Token>) -> Self {
        TokenStream {
            tokens,
            index: 0,
            end_of_stream: Token::end_of_stream(),
        }
    }

    pub fn finished(&self) -> bool {
        self.index >= self.tokens.len()
    }

    pub fn peek(&self, lookahead: usize) -> &Token {
        self.tokens
            .get(self.index + lookahead)
            .unwrap_or(&self.end_of_stream)
    }

    pub fn peek_is(&self, kind: TokenKind, lookahead: usize) -> bool {
        self.peek(lookahead).kind == kind
    }

    /// The first token that is not whitespace, with its lookahead distance.
    pub fn peek_non_whitespace(&self) -> (usize, &Token) {
        let mut lookahead = 0;
        while self.peek_is(TokenKind::Whitespace, lookahead) {
            lookahead += 1;
        }
        (lookahead, self.peek(lookahead))
    }

    /// Skip the next token unconditionally.
    pub fn advance(&mut self) {
        self.index += 1;
    }

    /// Advance past the next token, checking its kind when `expected` is given.
    pub fn consume(&mut self, expected: Option<TokenKind>) -> Result<(), ParseError> {
        if let Some(expected) = expected {
            if !self.peek_is(expected, 0) {
                return Err(ParseError::expected(expected, self.peek(0)));
            }
        }
        self.advance();
        Ok(())
    }

    /// Like [`TokenStream::consume`], returning the consumed token's source text.
    pub fn consume_text(&mut self, expected: Option<TokenKind>) -> Result<String, ParseError> {
        let text = self.peek(0).source_text().to_string();
        self.consume(expected)?;
        Ok(text)
    }
}

impl From<Vec<Token>> for TokenStream {
    fn from(tokens: Vec<Token>) -> Self {
        TokenStream::new(tokens)
    }
}

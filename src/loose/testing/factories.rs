//! Test factories for creating tokens succinctly

use crate::loose::token::{Token, TokenKind};

/// Make a single-line token starting at byte `start` of a line without indentation.
///
/// The column is derived from `start`, so this only fits ASCII sources on line 0.
pub fn mk_token(kind: TokenKind, text: &str, start: usize, end: usize) -> Token {
    Token {
        kind,
        span: start..end,
        line_number: 0,
        char_number: start + 1,
        indent: 0,
        text: match kind.fixed_text() {
            Some(_) => None,
            None => Some(text.to_string()),
        },
    }
}

/// Make a vector of tokens from a list of (kind, text, start, end)
pub fn mk_tokens(specs: &[(TokenKind, &str, usize, usize)]) -> Vec<Token> {
    specs
        .iter()
        .map(|&(kind, text, start, end)| mk_token(kind, text, start, end))
        .collect()
}

/// Strip everything but the kinds
pub fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

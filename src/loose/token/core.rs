//! Core token types
//!
//!     A token is a classified, positioned span of source text. Tokens never drop characters:
//!     every character of the input belongs to exactly one token, whitespace and comments
//!     included, so the token list can always be turned back into the exact source.
//!
//!     Kinds whose text is implied by the kind itself (parens, brackets, newline, slash) do
//!     not store their text. Everything else carries the literal substring.

use serde::Serialize;
use std::fmt;
use std::ops::Range;

use super::position::Position;

/// The closed set of token kinds produced by the lexer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    LeftParen,
    RightParen,
    LeftBracket,
    RightBracket,
    Identifier,
    Whitespace,
    Newline,
    SingleQuotedString,
    DoubleQuotedString,
    Slash,
    LineComment,
    Unrecognized,
    /// Synthetic sentinel returned when looking past the end of a token list.
    /// Never produced by the lexer.
    EndOfStream,
}

impl TokenKind {
    /// Text implied by the kind, for kinds that don't store their own.
    pub fn fixed_text(self) -> Option<&'static str> {
        match self {
            TokenKind::LeftParen => Some("("),
            TokenKind::RightParen => Some(")"),
            TokenKind::LeftBracket => Some("["),
            TokenKind::RightBracket => Some("]"),
            TokenKind::Newline => Some("\n"),
            TokenKind::Slash => Some("/"),
            TokenKind::EndOfStream => Some(""),
            _ => None,
        }
    }

    /// Whitespace, newlines and comments: tokens that carry formatting but no meaning.
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            TokenKind::Whitespace | TokenKind::Newline | TokenKind::LineComment
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            TokenKind::LeftParen => "lparen",
            TokenKind::RightParen => "rparen",
            TokenKind::LeftBracket => "lbracket",
            TokenKind::RightBracket => "rbracket",
            TokenKind::Identifier => "ident",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Newline => "newline",
            TokenKind::SingleQuotedString => "squoted_str",
            TokenKind::DoubleQuotedString => "dquoted_str",
            TokenKind::Slash => "slash",
            TokenKind::LineComment => "double_slash_comment",
            TokenKind::Unrecognized => "unrecognized",
            TokenKind::EndOfStream => "eof",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexed token
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Byte range of the token in the source (half-open)
    pub span: Range<usize>,
    /// 0-based count of newlines consumed before this token
    pub line_number: usize,
    /// 1-based column (in chars) of the token start
    pub char_number: usize,
    /// Width of the leading whitespace of the line this token is on
    pub indent: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Token {
    /// The end-of-stream sentinel: zeroed positions and no text.
    pub fn end_of_stream() -> Self {
        Token {
            kind: TokenKind::EndOfStream,
            span: 0..0,
            line_number: 0,
            char_number: 0,
            indent: 0,
            text: None,
        }
    }

    /// The literal source text of this token, derived from the kind when not stored.
    pub fn source_text(&self) -> &str {
        match &self.text {
            Some(text) => text,
            None => self.kind.fixed_text().unwrap_or(""),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.line_number, self.char_number)
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {:?}",
            self.position(),
            self.kind,
            self.source_text()
        )
    }
}

//! Parse errors
//!
//!     Only fatal failures are errors. Unexpected tokens trailing an otherwise valid
//!     expression are recorded on the term instead (see [`Term::parse_error`]) and parsing
//!     carries on.
//!
//! [`Term::parse_error`]: crate::loose::ast::Term::parse_error

use std::fmt;

use crate::loose::token::{Position, Token, TokenKind};

/// Errors that abort a parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A specific token kind was required but another was found
    Expected {
        expected: TokenKind,
        found: TokenKind,
        position: Position,
    },
    /// No grammar production starts with the token
    NoProduction {
        found: TokenKind,
        text: String,
        position: Position,
    },
    /// Expressions nested deeper than the parser allows
    TooDeep { limit: usize, position: Position },
}

impl ParseError {
    pub fn expected(expected: TokenKind, found: &Token) -> Self {
        ParseError::Expected {
            expected,
            found: found.kind,
            position: found.position(),
        }
    }

    pub fn no_production(found: &Token) -> Self {
        ParseError::NoProduction {
            found: found.kind,
            text: found.source_text().to_string(),
            position: found.position(),
        }
    }

    pub fn too_deep(limit: usize, at: &Token) -> Self {
        ParseError::TooDeep {
            limit,
            position: at.position(),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            ParseError::Expected { position, .. }
            | ParseError::NoProduction { position, .. }
            | ParseError::TooDeep { position, .. } => *position,
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Expected {
                expected,
                found,
                position,
            } => write!(f, "{}: expected {}, next is {}", position, expected, found),
            ParseError::NoProduction {
                found: TokenKind::EndOfStream,
                ..
            } => write!(f, "unexpected end of input"),
            ParseError::NoProduction {
                found,
                text,
                position,
            } => write!(f, "{}: unexpected token {} {:?}", position, found, text),
            ParseError::TooDeep { limit, position } => {
                write!(f, "{}: nesting deeper than {} levels", position, limit)
            }
        }
    }
}

impl std::error::Error for ParseError {}

impl From<ParseError> for String {
    fn from(err: ParseError) -> Self {
        err.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_expected() {
        let err = ParseError::Expected {
            expected: TokenKind::RightParen,
            found: TokenKind::EndOfStream,
            position: Position::new(0, 0),
        };
        assert_eq!(err.to_string(), "0:0: expected rparen, next is eof");
    }

    #[test]
    fn test_display_no_production() {
        let err = ParseError::NoProduction {
            found: TokenKind::RightParen,
            text: ")".to_string(),
            position: Position::new(3, 7),
        };
        assert_eq!(err.to_string(), "3:7: unexpected token rparen \")\"");
        assert_eq!(err.position(), Position::new(3, 7));
    }

    #[test]
    fn test_display_too_deep() {
        let err = ParseError::TooDeep {
            limit: 128,
            position: Position::new(0, 257),
        };
        assert_eq!(err.to_string(), "0:257: nesting deeper than 128 levels");
    }

    #[test]
    fn test_display_end_of_input() {
        let err = ParseError::no_production(&Token::end_of_stream());
        assert_eq!(String::from(err), "unexpected end of input");
    }
}

//! Base tokenization
//!
//!     Classifies the next token from the char under the cursor. Every branch consumes at
//!     least one char, so tokenization always makes progress and never fails: characters
//!     the lexer has no rule for become one-char `Unrecognized` tokens, and a string
//!     missing its closing quote simply runs to the end of the input.

use super::cursor::Cursor;
use super::reader::TokenReader;
use crate::loose::token::{Token, TokenKind};

fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn lookahead_whitespace(cursor: &Cursor) -> usize {
    let mut lookahead = 1;
    while cursor.peek_char(lookahead) == ' ' {
        lookahead += 1;
    }
    lookahead
}

fn lookahead_identifier(cursor: &Cursor) -> usize {
    let mut lookahead = 1;
    while is_identifier_char(cursor.peek_char(lookahead)) {
        lookahead += 1;
    }
    lookahead
}

/// Length of a quoted string starting at the cursor, delimiters included.
fn lookahead_quoted(cursor: &Cursor, quote: char) -> usize {
    let mut lookahead = 1;
    let mut escaped = false;

    loop {
        let next = cursor.peek_char(lookahead);

        if next == Cursor::EOF {
            break;
        }

        if escaped {
            escaped = false;
        } else if next == quote {
            lookahead += 1;
            break;
        } else if next == '\\' {
            escaped = true;
        }

        lookahead += 1;
    }

    lookahead
}

/// Lex one token at the cursor and advance past it.
///
/// Callers must check [`Cursor::finished`] first.
pub fn next_token(cursor: &mut Cursor) -> Token {
    match cursor.peek_char(0) {
        '(' => cursor.consume(TokenKind::LeftParen, 1, false),
        ')' => cursor.consume(TokenKind::RightParen, 1, false),
        '[' => cursor.consume(TokenKind::LeftBracket, 1, false),
        ']' => cursor.consume(TokenKind::RightBracket, 1, false),
        '\n' => cursor.consume(TokenKind::Newline, 1, false),
        '/' if cursor.peek_char(1) == '/' => {
            cursor.consume_while(TokenKind::LineComment, |c| c != '\n')
        }
        '/' => cursor.consume(TokenKind::Slash, 1, false),
        ' ' => {
            let length = lookahead_whitespace(cursor);
            cursor.consume(TokenKind::Whitespace, length, true)
        }
        '\'' => {
            let length = lookahead_quoted(cursor, '\'');
            cursor.consume(TokenKind::SingleQuotedString, length, true)
        }
        '"' => {
            let length = lookahead_quoted(cursor, '"');
            cursor.consume(TokenKind::DoubleQuotedString, length, true)
        }
        c if is_identifier_char(c) => {
            let length = lookahead_identifier(cursor);
            cursor.consume(TokenKind::Identifier, length, true)
        }
        _ => cursor.consume(TokenKind::Unrecognized, 1, true),
    }
}

/// Tokenize a complete source string.
///
/// Concatenating the text of the returned tokens reproduces `source` exactly.
pub fn tokenize(source: &str) -> Vec<Token> {
    TokenReader::new(source).collect()
}

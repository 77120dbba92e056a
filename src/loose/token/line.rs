//! Physical line lookup
//!
//!     Tokens are produced in source order and carry their 0-based line number, so the
//!     tokens of any physical line form one contiguous slice of the token list. These
//!     helpers find that slice, which is how a caller holding a stack-frame line number
//!     gets at the tokens, text and indentation of the offending line.
//!
//!     Line numbers here are 0-based like [`Token::line_number`]. Stack frames report
//!     1-based lines; subtract one before calling.

use super::core::{Token, TokenKind};
use super::formatting::detokenize;

/// The tokens on `line_number`, including the terminating newline token if any.
pub fn tokens_on_line(tokens: &[Token], line_number: usize) -> &[Token] {
    let start = tokens.partition_point(|t| t.line_number < line_number);
    let end = tokens.partition_point(|t| t.line_number <= line_number);
    &tokens[start..end]
}

/// The text of `line_number` without its line terminator.
///
/// Returns `None` when the token list has no tokens on that line.
pub fn line_text(tokens: &[Token], line_number: usize) -> Option<String> {
    let line = tokens_on_line(tokens, line_number);
    if line.is_empty() {
        return None;
    }
    let content = match line.last() {
        Some(last) if last.is(TokenKind::Newline) => &line[..line.len() - 1],
        _ => line,
    };
    Some(detokenize(content))
}

/// The indentation width of `line_number`, or `None` if the line has no tokens.
pub fn line_indent(tokens: &[Token], line_number: usize) -> Option<usize> {
    tokens_on_line(tokens, line_number).first().map(|t| t.indent)
}

/// Number of physical lines covered by the token list.
pub fn line_count(tokens: &[Token]) -> usize {
    match tokens.last() {
        None => 0,
        Some(last) if last.is(TokenKind::Newline) => last.line_number + 2,
        Some(last) => last.line_number + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loose::lexing::tokenize;

    const SOURCE: &str = "first(a)\n    second(b c)\n\nlast()";

    #[test]
    fn test_tokens_on_line() {
        let tokens = tokenize(SOURCE);
        let line = tokens_on_line(&tokens, 1);
        let kinds: Vec<_> = line.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Whitespace,
                TokenKind::Identifier,
                TokenKind::LeftParen,
                TokenKind::Identifier,
                TokenKind::Whitespace,
                TokenKind::Identifier,
                TokenKind::RightParen,
                TokenKind::Newline,
            ]
        );
        assert!(line.iter().all(|t| t.line_number == 1));
    }

    #[test]
    fn test_line_text_strips_terminator() {
        let tokens = tokenize(SOURCE);
        assert_eq!(line_text(&tokens, 0).as_deref(), Some("first(a)"));
        assert_eq!(line_text(&tokens, 1).as_deref(), Some("    second(b c)"));
        assert_eq!(line_text(&tokens, 2).as_deref(), Some(""));
        assert_eq!(line_text(&tokens, 3).as_deref(), Some("last()"));
        assert_eq!(line_text(&tokens, 4), None);
    }

    #[test]
    fn test_line_indent() {
        let tokens = tokenize(SOURCE);
        assert_eq!(line_indent(&tokens, 0), Some(0));
        assert_eq!(line_indent(&tokens, 1), Some(4));
        assert_eq!(line_indent(&tokens, 9), None);
    }

    #[test]
    fn test_line_count() {
        assert_eq!(line_count(&tokenize("")), 0);
        assert_eq!(line_count(&tokenize("a")), 1);
        assert_eq!(line_count(&tokenize("a\n")), 2);
        assert_eq!(line_count(&tokenize(SOURCE)), 4);
    }
}

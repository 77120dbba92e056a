//! Detokenizer
//!
//! Converts a stream of tokens back into source text.
//!
//! The lexer is lossless, so detokenizing the full output of [`tokenize`] yields the
//! original source byte for byte. This is what the round-trip tests lean on, and what
//! tooling uses to print a slice of tokens (for instance a single line) as text.
//!
//! [`tokenize`]: crate::loose::lexing::tokenize

use super::core::Token;

/// Trait for converting a token to its string representation
pub trait ToSourceString {
    fn to_source_string(&self) -> String;
}

impl ToSourceString for Token {
    fn to_source_string(&self) -> String {
        self.source_text().to_string()
    }
}

/// Detokenize a stream of tokens into a string
pub fn detokenize(tokens: &[Token]) -> String {
    let mut result = String::with_capacity(tokens.iter().map(|t| t.span.len()).sum());

    for token in tokens {
        result.push_str(token.source_text());
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loose::lexing::tokenize;

    #[test]
    fn test_detokenize_simple_call() {
        let source = "print(x)";
        let tokens = tokenize(source);
        assert_eq!(detokenize(&tokens), source);
    }

    #[test]
    fn test_detokenize_multiline_with_comments() {
        let source = "  console_log('hi' \"there\")  // trailing\n\nnext(1 / 2)\n";
        let tokens = tokenize(source);
        assert_eq!(detokenize(&tokens), source);
    }

    #[test]
    fn test_detokenize_unrecognized_and_unicode() {
        let source = "a\t→ b;\r\n{ }";
        let tokens = tokenize(source);
        assert_eq!(detokenize(&tokens), source);
    }

    #[test]
    fn test_detokenize_unterminated_string() {
        let source = "f('never closed";
        let tokens = tokenize(source);
        assert_eq!(detokenize(&tokens), source);
    }

    #[test]
    fn test_to_source_string_fixed_kind() {
        let tokens = tokenize("[");
        assert_eq!(tokens[0].to_source_string(), "[");
    }
}

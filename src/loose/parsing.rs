//! Parser
//!
//!     Turns a token list into a flat [`Block`] of terms. The parser works on a
//!     [`TokenStream`], which allows lookahead past whitespace, and is format preserving:
//!     the text of every token ends up in some term's `format`, so
//!     [`Block::reconstruct`] returns the parsed input.
//!
//!     Each parse is independent and a pure function of its tokens. The only configuration
//!     is the [`InfixOperators`] table, empty unless one is passed to
//!     [`Parser::with_operators`].

pub mod error;
pub mod operators;
pub mod parser;
pub mod stream;

pub use error::ParseError;
pub use operators::{Associativity, InfixOperator, InfixOperators};
pub use parser::{Parser, MAX_DEPTH};
pub use stream::TokenStream;

use crate::loose::ast::Block;
use crate::loose::lexing::tokenize;

/// Parse a token stream with the default (empty) operator table.
pub fn parse(tokens: TokenStream) -> Result<Block, ParseError> {
    Parser::new(tokens).parse()
}

/// Tokenize and parse `source`.
pub fn parse_source(source: &str) -> Result<Block, ParseError> {
    parse(TokenStream::new(tokenize(source)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source_round_trips() {
        let source = "setup()\n  run(fast  check(a b))  // go\n";
        let block = parse_source(source).unwrap();
        assert_eq!(block.reconstruct(), source);
        assert_eq!(block.roots().len(), 2);
    }

    #[test]
    fn test_parse_from_token_vec() {
        let block = parse(tokenize("f()").into()).unwrap();
        assert_eq!(block.len(), 1);
    }
}

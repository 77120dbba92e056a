//! Lexer
//!
//!     Turns source text into a flat list of tokens. The lexer is lossless: whitespace,
//!     newlines and comments are tokens like everything else, and each token records its
//!     byte span, so the list can be turned back into the exact input with
//!     [`detokenize`](crate::loose::token::detokenize).
//!
//! Layout
//!
//!     1. [`cursor`]: char-indexed reader doing the line, column and indent bookkeeping.
//!     2. [`base_tokenization`]: the stateless `next_token` dispatch on the next char.
//!     3. [`reader`]: a one-token-lookahead pull stream over the two, which is also an
//!        `Iterator<Item = Token>`.
//!
//!     [`tokenize`] drains a reader into a `Vec<Token>`, which is what the parser consumes.

pub mod base_tokenization;
pub mod cursor;
pub mod reader;

pub use base_tokenization::{next_token, tokenize};
pub use cursor::Cursor;
pub use reader::TokenReader;

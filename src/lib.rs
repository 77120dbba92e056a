//! # loose-parser
//!
//! A lossless lexer and format-preserving parser for loose, call-style source lines.
//!
//! Data flows one way:
//!
//!   text → [Cursor](loose::lexing::Cursor) → [next_token](loose::lexing::next_token)
//!        → `Vec<Token>` → [TokenStream](loose::parsing::TokenStream)
//!        → [Parser](loose::parsing::Parser) → [Block](loose::ast::Block)
//!
//! Two guarantees hold throughout:
//!
//! - Tokenization is lossless: [detokenize](loose::token::detokenize) of the token list
//!   returns the source.
//! - Parsing is format preserving: [Block::reconstruct](loose::ast::Block::reconstruct)
//!   returns the parsed source.
//!
//! Terms refer to each other by index within their block, never by pointer.
//!
//! For test helpers, see the [testing module](loose::testing).

pub mod loose;

pub use loose::ast::{Block, Term, TermRef, TermType};
pub use loose::lexing::tokenize;
pub use loose::parsing::{parse, parse_source, ParseError, TokenStream};
pub use loose::token::{Token, TokenKind};

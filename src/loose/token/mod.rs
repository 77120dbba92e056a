//! Core token types and helpers shared across the lexer, parser, and tooling.

pub mod core;
pub mod formatting;
pub mod line;
pub mod position;

pub use self::core::{Token, TokenKind};
pub use formatting::{detokenize, ToSourceString};
pub use line::{line_indent, line_text, tokens_on_line};
pub use position::Position;

//! Infix operator table
//!
//!     Binary operators are data, not grammar code. The precedence-climbing loop in the
//!     parser consults this table for the token following an operand; adding an operator
//!     means adding an entry here and nothing else.
//!
//!     The default table is empty, so by default the loop exits right after the first
//!     operand.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::loose::token::TokenKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfixOperator {
    pub precedence: u32,
    pub associativity: Associativity,
}

impl InfixOperator {
    pub fn left(precedence: u32) -> Self {
        Self {
            precedence,
            associativity: Associativity::Left,
        }
    }

    pub fn right(precedence: u32) -> Self {
        Self {
            precedence,
            associativity: Associativity::Right,
        }
    }

    /// Minimum precedence for the right-hand operand.
    pub fn next_min_precedence(&self) -> u32 {
        match self.associativity {
            Associativity::Left => self.precedence + 1,
            Associativity::Right => self.precedence,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InfixOperators {
    operators: HashMap<TokenKind, InfixOperator>,
}

static EMPTY: Lazy<InfixOperators> = Lazy::new(InfixOperators::default);

impl InfixOperators {
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared empty table used by [`Parser::new`](super::Parser::new).
    pub fn empty() -> &'static InfixOperators {
        &EMPTY
    }

    pub fn with(mut self, kind: TokenKind, operator: InfixOperator) -> Self {
        self.insert(kind, operator);
        self
    }

    pub fn insert(&mut self, kind: TokenKind, operator: InfixOperator) {
        self.operators.insert(kind, operator);
    }

    pub fn get(&self, kind: TokenKind) -> Option<&InfixOperator> {
        self.operators.get(&kind)
    }

    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_is_empty() {
        assert!(InfixOperators::empty().is_empty());
        assert!(InfixOperators::empty().get(TokenKind::Slash).is_none());
    }

    #[test]
    fn test_with_registers_operator() {
        let table = InfixOperators::new().with(TokenKind::Slash, InfixOperator::left(3));
        assert_eq!(table.get(TokenKind::Slash), Some(&InfixOperator::left(3)));
        assert!(table.get(TokenKind::Identifier).is_none());
    }

    #[test]
    fn test_next_min_precedence() {
        assert_eq!(InfixOperator::left(2).next_min_precedence(), 3);
        assert_eq!(InfixOperator::right(2).next_min_precedence(), 2);
    }
}

//! Terms and term references
//!
//!     A term is one parsed expression. Terms never point at each other directly: operands
//!     are [`TermRef`]s, which either name a free identifier or hold the `block_index` of a
//!     term that was appended to the same block earlier. Because terms are appended in
//!     post-order, an indexed reference always points backwards and stays valid however
//!     the block is moved or cloned.

use serde::Serialize;
use std::fmt;

use super::block::Block;

/// Operand of a term
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TermRef {
    /// A free identifier not bound to any term
    Named(String),
    /// Back-reference to a term of the same block, by `block_index`
    Indexed(usize),
}

impl TermRef {
    pub fn name(&self) -> Option<&str> {
        match self {
            TermRef::Named(name) => Some(name),
            TermRef::Indexed(_) => None,
        }
    }

    pub fn index(&self) -> Option<usize> {
        match self {
            TermRef::Named(_) => None,
            TermRef::Indexed(index) => Some(*index),
        }
    }
}

impl fmt::Display for TermRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TermRef::Named(name) => f.write_str(name),
            TermRef::Indexed(index) => write!(f, "${}", index),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TermType {
    /// `name(arg arg ...)`: inputs are the callee name followed by one ref per argument
    FunctionCall,
    /// A bare identifier: the single input is its name
    Identifier,
    /// `left op right`: inputs are the operator text, then the left and right operands
    Infix,
}

impl TermType {
    pub fn name(self) -> &'static str {
        match self {
            TermType::FunctionCall => "func_call",
            TermType::Identifier => "identifier",
            TermType::Infix => "infix",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Term {
    pub term_type: TermType,
    /// Position in the owning block. Only meaningful once the term has been appended.
    pub block_index: usize,
    pub inputs: Vec<TermRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nested: Option<Block>,
    /// Exact source text this term was parsed from, surrounding trivia included
    pub format: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse_error: Option<String>,
}

impl Term {
    pub fn new(term_type: TermType) -> Self {
        Term {
            term_type,
            block_index: 0,
            inputs: Vec::new(),
            nested: None,
            format: String::new(),
            parse_error: None,
        }
    }

    pub fn has_error(&self) -> bool {
        self.parse_error.is_some()
    }

    /// The leading name input of a call, identifier or infix term.
    pub fn name(&self) -> Option<&str> {
        self.inputs.first().and_then(TermRef::name)
    }

    /// Indices of the terms this term refers to, in input order.
    pub fn referenced_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.inputs.iter().filter_map(TermRef::index)
    }
}

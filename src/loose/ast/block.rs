//! Blocks
//!
//!     A block is an ordered, owned sequence of terms. Insertion order is parse order: the
//!     operands of a term are appended before the term itself, so every indexed reference
//!     in a block points at a smaller index.
//!
//!     A root term is one that no other term of the block references, i.e. a top-level
//!     expression. Each root's format covers its whole source fragment, operands
//!     included, so concatenating the root formats in block order rebuilds the text the
//!     block was parsed from.

use serde::Serialize;

use super::term::{Term, TermRef};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Block {
    pub terms: Vec<Term>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a term, assigning its `block_index`, and return that index.
    pub fn append(&mut self, mut term: Term) -> usize {
        let index = self.terms.len();
        term.block_index = index;
        self.terms.push(term);
        index
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn term(&self, index: usize) -> Option<&Term> {
        self.terms.get(index)
    }

    /// The term an indexed reference points at. Named refs resolve to nothing.
    pub fn resolve(&self, term_ref: &TermRef) -> Option<&Term> {
        term_ref.index().and_then(|index| self.term(index))
    }

    /// Whether any other term of the block refers to `index`.
    pub fn is_referenced(&self, index: usize) -> bool {
        self.terms
            .get(index + 1..)
            .unwrap_or_default()
            .iter()
            .any(|term| term.referenced_indices().any(|i| i == index))
    }

    /// Terms not used as an operand by any other term, in block order.
    pub fn roots(&self) -> Vec<&Term> {
        let mut referenced = vec![false; self.terms.len()];
        for term in &self.terms {
            for index in term.referenced_indices() {
                if let Some(flag) = referenced.get_mut(index) {
                    *flag = true;
                }
            }
        }
        self.terms
            .iter()
            .zip(referenced)
            .filter(|(_, referenced)| !referenced)
            .map(|(term, _)| term)
            .collect()
    }

    /// Terms carrying a recoverable parse error.
    pub fn errors(&self) -> impl Iterator<Item = &Term> {
        self.terms.iter().filter(|term| term.has_error())
    }

    /// Rebuild the source text from the root terms' formats.
    pub fn reconstruct(&self) -> String {
        self.roots()
            .into_iter()
            .map(|term| term.format.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loose::ast::TermType;

    fn identifier(name: &str) -> Term {
        let mut term = Term::new(TermType::Identifier);
        term.inputs.push(TermRef::Named(name.to_string()));
        term.format = name.to_string();
        term
    }

    #[test]
    fn test_append_assigns_block_index() {
        let mut block = Block::new();
        assert_eq!(block.append(identifier("a")), 0);
        assert_eq!(block.append(identifier("b")), 1);
        assert_eq!(block.terms[1].block_index, 1);
        assert_eq!(block.len(), 2);
    }

    #[test]
    fn test_resolve() {
        let mut block = Block::new();
        block.append(identifier("a"));
        assert_eq!(
            block.resolve(&TermRef::Indexed(0)).and_then(Term::name),
            Some("a")
        );
        assert!(block.resolve(&TermRef::Indexed(5)).is_none());
        assert!(block.resolve(&TermRef::Named("a".to_string())).is_none());
    }

    #[test]
    fn test_roots_and_reconstruct() {
        let mut block = Block::new();
        let x = block.append(identifier("x"));
        let mut call = Term::new(TermType::FunctionCall);
        call.inputs = vec![TermRef::Named("f".to_string()), TermRef::Indexed(x)];
        call.format = "f(x) ".to_string();
        block.append(call);
        block.append(identifier("y"));

        let roots: Vec<_> = block.roots().iter().map(|t| t.block_index).collect();
        assert_eq!(roots, vec![1, 2]);
        assert!(block.is_referenced(0));
        assert!(!block.is_referenced(1));
        assert_eq!(block.reconstruct(), "f(x) y");
    }

    #[test]
    fn test_errors() {
        let mut block = Block::new();
        block.append(identifier("ok"));
        let mut bad = identifier("bad");
        bad.parse_error = Some("unexpected token: ]".to_string());
        block.append(bad);
        let errors: Vec<_> = block.errors().map(|t| t.block_index).collect();
        assert_eq!(errors, vec![1]);
    }
}

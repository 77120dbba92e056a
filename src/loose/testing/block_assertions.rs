//! Fluent assertion API for parsed blocks

use crate::loose::ast::{Block, Term, TermRef, TermType};

/// Create an assertion builder for a block
pub fn assert_block(block: &Block) -> BlockAssertion<'_> {
    BlockAssertion { block }
}

pub struct BlockAssertion<'a> {
    block: &'a Block,
}

impl<'a> BlockAssertion<'a> {
    pub fn term_count(self, expected: usize) -> Self {
        assert_eq!(
            self.block.len(),
            expected,
            "Expected {} terms, found {}",
            expected,
            self.block.len()
        );
        self
    }

    pub fn root_count(self, expected: usize) -> Self {
        let actual = self.block.roots().len();
        assert_eq!(
            actual, expected,
            "Expected {} root terms, found {}",
            expected, actual
        );
        self
    }

    pub fn no_errors(self) -> Self {
        let errors: Vec<_> = self
            .block
            .errors()
            .map(|t| (t.block_index, t.parse_error.clone()))
            .collect();
        assert!(errors.is_empty(), "Expected no parse errors, found {:?}", errors);
        self
    }

    pub fn reconstructs(self, expected: &str) -> Self {
        assert_eq!(self.block.reconstruct(), expected, "Reconstructed text differs");
        self
    }

    /// Assert on the term at `block_index`
    pub fn term<F>(self, index: usize, f: F) -> Self
    where
        F: FnOnce(TermAssertion<'a>),
    {
        let term = self.block.term(index).unwrap_or_else(|| {
            panic!(
                "Term index {} out of bounds (block has {} terms)",
                index,
                self.block.len()
            )
        });
        f(TermAssertion {
            block: self.block,
            term,
            context: format!("term[{}]", index),
        });
        self
    }

    /// Assert on the `n`th root term
    pub fn root<F>(self, n: usize, f: F) -> Self
    where
        F: FnOnce(TermAssertion<'a>),
    {
        let roots = self.block.roots();
        let term = *roots.get(n).unwrap_or_else(|| {
            panic!("Root {} out of bounds (block has {} roots)", n, roots.len())
        });
        f(TermAssertion {
            block: self.block,
            term,
            context: format!("root[{}]", n),
        });
        self
    }
}

pub struct TermAssertion<'a> {
    block: &'a Block,
    term: &'a Term,
    context: String,
}

impl<'a> TermAssertion<'a> {
    pub fn term_type(self, expected: TermType) -> Self {
        assert_eq!(
            self.term.term_type, expected,
            "{}: Expected {}, found {}",
            self.context, expected, self.term.term_type
        );
        self
    }

    pub fn is_call(self, name: &str) -> Self {
        self.term_type(TermType::FunctionCall).named(name)
    }

    pub fn is_identifier(self, name: &str) -> Self {
        self.term_type(TermType::Identifier).named(name)
    }

    pub fn named(self, expected: &str) -> Self {
        assert_eq!(
            self.term.name(),
            Some(expected),
            "{}: Expected name {:?}",
            self.context,
            expected
        );
        self
    }

    pub fn format(self, expected: &str) -> Self {
        assert_eq!(
            self.term.format, expected,
            "{}: Expected format {:?}, found {:?}",
            self.context, expected, self.term.format
        );
        self
    }

    pub fn input_count(self, expected: usize) -> Self {
        assert_eq!(
            self.term.inputs.len(),
            expected,
            "{}: Expected {} inputs, found {}",
            self.context,
            expected,
            self.term.inputs.len()
        );
        self
    }

    pub fn error(self, expected: &str) -> Self {
        assert_eq!(
            self.term.parse_error.as_deref(),
            Some(expected),
            "{}: Expected parse error {:?}",
            self.context,
            expected
        );
        self
    }

    pub fn no_error(self) -> Self {
        assert!(
            self.term.parse_error.is_none(),
            "{}: Unexpected parse error {:?}",
            self.context,
            self.term.parse_error
        );
        self
    }

    /// Follow the indexed input at position `input` and assert on the referenced term
    pub fn arg<F>(self, input: usize, f: F) -> Self
    where
        F: FnOnce(TermAssertion<'a>),
    {
        let term_ref = self.term.inputs.get(input).unwrap_or_else(|| {
            panic!("{}: Input {} out of bounds", self.context, input)
        });
        let index = match term_ref {
            TermRef::Indexed(index) => *index,
            TermRef::Named(name) => panic!(
                "{}: Input {} is the free name {:?}, not a term",
                self.context, input, name
            ),
        };
        assert!(
            index < self.term.block_index,
            "{}: Input {} points forward to term {}",
            self.context,
            input,
            index
        );
        let term = self.block.term(index).unwrap_or_else(|| {
            panic!("{}: Input {} points at missing term {}", self.context, input, index)
        });
        f(TermAssertion {
            block: self.block,
            term,
            context: format!("{}.arg[{}]", self.context, input),
        });
        self
    }
}

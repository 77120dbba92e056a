//! Recursive-descent parser
//!
//!     Grammar, in order of binding:
//!
//!         expression  := trivia infix trailing
//!         infix       := prefix (OPERATOR trivia infix)*     precedence climbing
//!         prefix      := postfix
//!         postfix     := IDENT '(' (trivia | expression)* ')'
//!                      | IDENT
//!
//!     Arguments are separated by whitespace only; there is no comma handling.
//!
//! Format preservation
//!
//!     Every consumed token's text ends up in the `format` of some term. Operands are
//!     appended to the block before the term that uses them, and a term's format includes
//!     its operands' text, so the formats of the root terms concatenate back to the input.
//!
//! Errors
//!
//!     A position where no production applies aborts the whole parse with a
//!     [`ParseError`]. Tokens that cannot follow an otherwise complete expression are
//!     recorded as that term's `parse_error` and swallowed into its format; parsing goes on
//!     with the next sibling. A `)` only closes an argument list while one is open; at the
//!     top level it is junk like any other.
//!
//!     Nesting deeper than [`MAX_DEPTH`] expressions is fatal rather than exhausting the
//!     stack.

use super::error::ParseError;
use super::operators::InfixOperators;
use super::stream::TokenStream;
use crate::loose::ast::{Block, Term, TermRef, TermType};
use crate::loose::token::TokenKind;

/// Maximum number of expressions that may be open at once.
pub const MAX_DEPTH: usize = 128;

pub struct Parser<'o> {
    tokens: TokenStream,
    block: Block,
    operators: &'o InfixOperators,
    /// Argument lists currently open
    open_calls: usize,
    /// Expressions and right operands currently being parsed
    depth: usize,
}

impl Parser<'static> {
    /// A parser with no infix operators.
    pub fn new(tokens: TokenStream) -> Self {
        Parser::with_operators(tokens, InfixOperators::empty())
    }
}

impl<'o> Parser<'o> {
    pub fn with_operators(tokens: TokenStream, operators: &'o InfixOperators) -> Self {
        Parser {
            tokens,
            block: Block::new(),
            operators,
            open_calls: 0,
            depth: 0,
        }
    }

    /// Parse expressions until the stream runs out.
    pub fn parse(mut self) -> Result<Block, ParseError> {
        while !self.tokens.finished() {
            self.expression()?;
        }
        Ok(self.block)
    }

    /// Consume the next token whatever its kind and return its text.
    fn take_text(&mut self) -> String {
        let text = self.tokens.peek(0).source_text().to_string();
        self.tokens.advance();
        text
    }

    fn possible_whitespace(&mut self) -> String {
        if self.tokens.peek_is(TokenKind::Whitespace, 0) {
            return self.take_text();
        }
        String::new()
    }

    /// Whitespace, newlines and line comments.
    fn trivia(&mut self) -> String {
        let mut text = String::new();
        while self.tokens.peek(0).kind.is_trivia() {
            text.push_str(&self.take_text());
        }
        text
    }

    fn can_follow_expression(&self) -> bool {
        match self.tokens.peek(0).kind {
            TokenKind::RightParen => self.open_calls > 0,
            kind => {
                kind.is_trivia() || matches!(kind, TokenKind::EndOfStream | TokenKind::Identifier)
            }
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= MAX_DEPTH {
            return Err(ParseError::too_deep(MAX_DEPTH, self.tokens.peek(0)));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Parse one expression, append it to the block and return its index.
    fn expression(&mut self) -> Result<usize, ParseError> {
        self.enter()?;
        let prefix = self.trivia();
        let mut term = self.infix_expression(0)?;

        let mut suffix = self.possible_whitespace();
        if !self.can_follow_expression() {
            term.parse_error = Some(format!(
                "unexpected token: {}",
                self.tokens.peek(0).source_text()
            ));
            while !self.can_follow_expression() {
                suffix.push_str(&self.take_text());
            }
        }
        suffix.push_str(&self.trivia());

        term.format = format!("{}{}{}", prefix, term.format, suffix);
        self.leave();
        Ok(self.block.append(term))
    }

    fn infix_expression(&mut self, min_precedence: u32) -> Result<Term, ParseError> {
        let mut left = self.prefix_expression()?;

        loop {
            let (lookahead, next) = self.tokens.peek_non_whitespace();
            let kind = next.kind;
            let operator = match self.operators.get(kind) {
                Some(operator) if operator.precedence >= min_precedence => *operator,
                _ => break,
            };

            let mut format = String::new();
            for _ in 0..lookahead {
                format.push_str(&self.take_text());
            }
            let symbol = self.tokens.consume_text(Some(kind))?;
            format.push_str(&symbol);
            format.push_str(&self.trivia());

            self.enter()?;
            let right = self.infix_expression(operator.next_min_precedence())?;
            self.leave();

            let mut combined = Term::new(TermType::Infix);
            combined.format = format!("{}{}{}", left.format, format, right.format);
            let left_index = self.block.append(left);
            let right_index = self.block.append(right);
            combined.inputs = vec![
                TermRef::Named(symbol),
                TermRef::Indexed(left_index),
                TermRef::Indexed(right_index),
            ];
            left = combined;
        }

        Ok(left)
    }

    fn prefix_expression(&mut self) -> Result<Term, ParseError> {
        self.postfix_expression()
    }

    fn postfix_expression(&mut self) -> Result<Term, ParseError> {
        if self.tokens.peek_is(TokenKind::Identifier, 0) {
            if self.tokens.peek_is(TokenKind::LeftParen, 1) {
                return self.function_call();
            }

            let name = self.tokens.consume_text(Some(TokenKind::Identifier))?;
            let mut term = Term::new(TermType::Identifier);
            term.format = name.clone();
            term.inputs.push(TermRef::Named(name));
            return Ok(term);
        }

        Err(ParseError::no_production(self.tokens.peek(0)))
    }

    fn function_call(&mut self) -> Result<Term, ParseError> {
        let mut term = Term::new(TermType::FunctionCall);

        let name = self.tokens.consume_text(Some(TokenKind::Identifier))?;
        term.format.push_str(&name);
        term.inputs.push(TermRef::Named(name));
        term.format
            .push_str(&self.tokens.consume_text(Some(TokenKind::LeftParen))?);

        self.open_calls += 1;
        while !self.tokens.peek_is(TokenKind::RightParen, 0) && !self.tokens.finished() {
            if self.tokens.peek(0).kind.is_trivia() {
                term.format.push_str(&self.take_text());
                continue;
            }

            let index = self.expression()?;
            term.format.push_str(&self.block.terms[index].format);
            term.inputs.push(TermRef::Indexed(index));
        }
        self.open_calls -= 1;

        term.format
            .push_str(&self.tokens.consume_text(Some(TokenKind::RightParen))?);
        Ok(term)
    }
}

//! Parsed expression model
//!
//!     The parser produces a flat [`Block`] of [`Term`]s rather than a pointer tree.
//!     Operands are [`TermRef`]s holding either a free name or the index of an earlier
//!     term in the same block. A term may own a nested block for constructs with a body;
//!     ownership is strictly tree-shaped, so plain `Vec` and `Option` are all that's needed.

pub mod block;
pub mod term;

pub use block::Block;
pub use term::{Term, TermRef, TermType};

//! Testing utilities
//!
//!     - [`factories`]: build expected tokens succinctly
//!     - [`block_assertions`]: fluent assertions over parsed blocks, e.g.
//!
//! ```rust-example
//! let block = parse_source("f(g(x))")?;
//! assert_block(&block)
//!     .term_count(3)
//!     .root(0, |term| {
//!         term.is_call("f").input_count(2).arg(1, |g| {
//!             g.is_call("g");
//!         });
//!     });
//! ```

pub mod block_assertions;
pub mod factories;

pub use block_assertions::{assert_block, BlockAssertion, TermAssertion};

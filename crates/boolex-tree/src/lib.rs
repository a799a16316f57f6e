//! boolex expression tree
//!
//! This crate defines the n-ary expression tree produced by the boolex parser,
//! the operator vocabulary (comparisons, connectives and negation) and the
//! closed set of token kinds the evaluator classifies leaves into.

mod kind;
mod node;
mod operator;

pub use kind::*;
pub use node::*;
pub use operator::*;

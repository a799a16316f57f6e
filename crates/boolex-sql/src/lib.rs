//! SQL emission for boolex expression trees
//!
//! This crate renders an [`ExprNode`](boolex_tree::ExprNode) as a SQL boolean
//! expression suitable for a `WHERE` clause. Every operator node is wrapped in
//! its own parentheses, so the output never depends on SQL precedence rules.

mod writer;

pub use writer::{SqlWriter, to_sql};

//! Operator implementations
//!
//! - Comparison operators (`<`, `<=`, `>`, `>=`, `==`, `!=`)
//! - Logical operators (`!`, `&`, `|`)

pub mod comparison;
pub mod logical;

pub use comparison::*;
pub use logical::*;

//! Boolean expressions for Rust
//!
//! This crate parses a small boolean expression language and offers two ways
//! to use the result:
//! - Rendering as a SQL `WHERE` fragment
//! - Asynchronous evaluation against bound variables and functions
//!
//! # Example
//!
//! ```ignore
//! use boolex::{Expression, Value};
//!
//! let mut expr = Expression::new("STR_LENGTH(name) >= 3 & active")?;
//! assert_eq!(expr.to_sql()?, "((STR_LENGTH(name) >= 3) AND active)");
//!
//! expr.bind_variable("name", "boolex")?;
//! expr.bind_variable("active", true)?;
//! expr.bind_function("STR_LENGTH", |_, args: Vec<Value>| async move {
//!     Ok(Value::from(args[0].as_string().map_or(0, str::len)))
//! })?;
//!
//! assert_eq!(expr.execute_async().await?, Value::Boolean(true));
//! ```

mod expression;

// Re-export all public APIs from internal crates
pub use boolex_diagnostics as diagnostics;
pub use boolex_eval as eval;
pub use boolex_parser as parser;
pub use boolex_sql as sql;
pub use boolex_tree as tree;

// Convenience re-exports
pub use boolex_diagnostics::{BoolexError, Result};
pub use boolex_eval::{Environment, EvalError, EvalResult, Function, Value};
pub use boolex_parser::{add_explicit_grouping, parse};
pub use boolex_tree::{ExprNode, TokenKind};
pub use expression::Expression;

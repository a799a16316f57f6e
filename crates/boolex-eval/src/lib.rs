//! boolex Evaluation Engine
//!
//! This crate turns a parsed boolex tree into something that can be executed:
//!
//! - **Function expansion**: call leaves such as `LEN(name)` become function
//!   nodes whose children are the parsed arguments
//! - **Token classification**: every token maps to a [`TokenKind`], memoized
//!   per distinct token text
//! - **Bindings**: an [`Environment`] holds values for the discovered
//!   variables and callables for the discovered functions
//! - **Evaluation**: an asynchronous depth-first walk producing a [`Value`]
//!
//! # Example
//!
//! ```ignore
//! use boolex_eval::{CompiledExpression, Evaluator, Value};
//!
//! let program = CompiledExpression::from_source("LEN(name) > 3")?;
//! let env = program
//!     .environment_builder()
//!     .variable("name", "boolex")
//!     .function("LEN", |_, args: Vec<Value>| async move {
//!         Ok(Value::from(args[0].as_string().map_or(0, str::len)))
//!     })
//!     .build()?;
//!
//! let result = Evaluator::new(&program, &env).evaluate().await?;
//! assert_eq!(result, Value::Boolean(true));
//! ```
//!
//! # Semantics
//!
//! - `&` and `|` evaluate every operand left to right and fold the results;
//!   there is no short-circuit
//! - Comparisons accept numbers (integers widen to floats when mixed) and
//!   strings for all six operators, booleans and JSON values for `==`/`!=`
//! - `!`, `&` and `|` require boolean operands
//!
//! [`TokenKind`]: boolex_tree::TokenKind

pub mod classify;
pub mod context;
pub mod engine;
pub mod error;
mod expand;
pub mod function;
pub mod operators;
pub mod program;
pub mod value;

// Re-export main types
pub use classify::TokenClassifier;
pub use context::{Environment, EnvironmentBuilder};
pub use engine::Evaluator;
pub use error::{EvalError, EvalResult};
pub use function::Function;
pub use program::CompiledExpression;
pub use value::Value;

//! Common test utilities for boolex testing
//!
//! Provides string functions for binding into expressions and a call
//! recorder for checking evaluation order.

use boolex::{EvalError, EvalResult, Expression, Value};
use parking_lot::Mutex;
use std::sync::Arc;

/// Build an expression, panicking with the error on failure
#[track_caller]
pub fn expr(source: &str) -> Expression {
    Expression::new(source).unwrap_or_else(|e| panic!("Failed to build '{}': {}", source, e))
}

fn string_arg(name: &str, args: &[Value], index: usize) -> EvalResult<String> {
    args.get(index)
        .and_then(Value::as_string)
        .map(str::to_string)
        .ok_or_else(|| EvalError::function_failed(name, format!("argument {} must be a string", index)))
}

/// `STR_LENGTH(s)`: number of characters in `s`
pub async fn str_length(argc: usize, args: Vec<Value>) -> EvalResult<Value> {
    if argc != 1 {
        return Err(EvalError::function_failed("STR_LENGTH", "expected one argument"));
    }
    let s = string_arg("STR_LENGTH", &args, 0)?;
    Ok(Value::from(s.chars().count()))
}

/// `CONCAT(a, b, ...)`: all arguments joined
pub async fn concat(argc: usize, args: Vec<Value>) -> EvalResult<Value> {
    let mut out = String::new();
    for i in 0..argc {
        out.push_str(&string_arg("CONCAT", &args, i)?);
    }
    Ok(Value::from(out))
}

/// Records the order in which bound functions are called
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<String>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A function that records its name and returns `result`
    pub fn recorder(
        &self,
        name: &str,
        result: Value,
    ) -> impl Fn(usize, Vec<Value>) -> futures::future::Ready<EvalResult<Value>> + Send + Sync + 'static
    {
        let calls = Arc::clone(&self.calls);
        let name = name.to_string();
        move |_, _| {
            calls.lock().push(name.clone());
            futures::future::ready(Ok(result.clone()))
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

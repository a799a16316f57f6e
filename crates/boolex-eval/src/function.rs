//! Caller-supplied functions

use crate::error::EvalResult;
use crate::value::Value;
use async_trait::async_trait;
use std::future::Future;

/// An asynchronous function bound to a name used in an expression.
///
/// The evaluator passes the argument count followed by the evaluated
/// arguments in call order, and awaits the result before continuing.
///
/// Any `Fn(usize, Vec<Value>) -> impl Future<Output = EvalResult<Value>>`
/// closure implements this trait.
#[async_trait]
pub trait Function: Send + Sync {
    async fn call(&self, argc: usize, args: Vec<Value>) -> EvalResult<Value>;
}

#[async_trait]
impl<F, Fut> Function for F
where
    F: Fn(usize, Vec<Value>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = EvalResult<Value>> + Send + 'static,
{
    async fn call(&self, argc: usize, args: Vec<Value>) -> EvalResult<Value> {
        (self)(argc, args).await
    }
}

//! Variable and function bindings for evaluation

use crate::error::{EvalError, EvalResult};
use crate::function::Function;
use crate::program::CompiledExpression;
use crate::value::Value;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// Bindings for the names a compiled expression uses.
///
/// Every discovered name has a slot from the start; binding fills the slot.
/// Names the expression does not use cannot be bound.
#[derive(Clone)]
pub struct Environment {
    variables: IndexMap<String, Option<Value>>,
    functions: IndexMap<String, Option<Arc<dyn Function>>>,
    max_depth: usize,
}

impl Environment {
    /// Default limit on evaluation recursion depth
    pub const DEFAULT_MAX_DEPTH: usize = 256;

    /// Create an environment with unbound slots for the given names
    pub fn new(
        variables: impl IntoIterator<Item = String>,
        functions: impl IntoIterator<Item = String>,
    ) -> Self {
        Self {
            variables: variables.into_iter().map(|name| (name, None)).collect(),
            functions: functions.into_iter().map(|name| (name, None)).collect(),
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Bind a value to a discovered variable, replacing any earlier value
    pub fn bind_variable(&mut self, name: &str, value: impl Into<Value>) -> EvalResult<()> {
        let slot = self
            .variables
            .get_mut(name)
            .ok_or_else(|| EvalError::unknown_name(name))?;
        *slot = Some(value.into());
        Ok(())
    }

    /// Bind a callable to a discovered function name, replacing any earlier one
    pub fn bind_function(&mut self, name: &str, function: impl Function + 'static) -> EvalResult<()> {
        self.bind_function_arc(name, Arc::new(function))
    }

    pub fn bind_function_arc(&mut self, name: &str, function: Arc<dyn Function>) -> EvalResult<()> {
        let slot = self
            .functions
            .get_mut(name)
            .ok_or_else(|| EvalError::unknown_name(name))?;
        *slot = Some(function);
        Ok(())
    }

    /// Get a bound variable value
    pub fn variable(&self, name: &str) -> EvalResult<&Value> {
        self.variables
            .get(name)
            .and_then(Option::as_ref)
            .ok_or_else(|| EvalError::unbound_variable(name))
    }

    /// Get a bound function
    pub fn function(&self, name: &str) -> EvalResult<Arc<dyn Function>> {
        self.functions
            .get(name)
            .and_then(Option::clone)
            .ok_or_else(|| EvalError::unbound_function(name))
    }

    /// Names still waiting for a binding, variables first
    pub fn unbound_names(&self) -> Vec<&str> {
        let variables = self.variables.iter().filter(|(_, v)| v.is_none());
        let functions = self.functions.iter().filter(|(_, f)| f.is_none());
        variables
            .map(|(name, _)| name.as_str())
            .chain(functions.map(|(name, _)| name.as_str()))
            .collect()
    }

    pub fn is_fully_bound(&self) -> bool {
        self.variables.values().all(Option::is_some) && self.functions.values().all(Option::is_some)
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn set_max_depth(&mut self, depth: usize) {
        self.max_depth = depth;
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let functions: Vec<(&str, bool)> = self
            .functions
            .iter()
            .map(|(name, bound)| (name.as_str(), bound.is_some()))
            .collect();
        f.debug_struct("Environment")
            .field("variables", &self.variables)
            .field("functions", &functions)
            .field("max_depth", &self.max_depth)
            .finish()
    }
}

/// Builder for [`Environment`]
///
/// Binding errors are held until [`EnvironmentBuilder::build`].
pub struct EnvironmentBuilder {
    env: Environment,
    error: Option<EvalError>,
}

impl EnvironmentBuilder {
    pub fn new(program: &CompiledExpression) -> Self {
        Self {
            env: program.environment(),
            error: None,
        }
    }

    /// Set the maximum recursion depth
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.env.set_max_depth(depth);
        self
    }

    pub fn variable(mut self, name: &str, value: impl Into<Value>) -> Self {
        let result = self.env.bind_variable(name, value);
        self.keep_first(result);
        self
    }

    pub fn function(mut self, name: &str, function: impl Function + 'static) -> Self {
        let result = self.env.bind_function(name, function);
        self.keep_first(result);
        self
    }

    fn keep_first(&mut self, result: EvalResult<()>) {
        if self.error.is_none() {
            self.error = result.err();
        }
    }

    /// Build the environment, failing on the first rejected binding
    pub fn build(self) -> EvalResult<Environment> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self.env),
        }
    }
}

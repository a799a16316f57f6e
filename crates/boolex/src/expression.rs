//! The `Expression` facade

use boolex_diagnostics::Result;
use boolex_eval::{CompiledExpression, Environment, EvalResult, Evaluator, Function, Value};
use boolex_tree::ExprNode;
use std::fmt;
use std::str::FromStr;

/// A parsed boolean expression together with its own bindings.
///
/// Construction validates, parses and expands the text; an `Expression` that
/// exists is always well formed. Bindings made through
/// [`bind_variable`](Self::bind_variable) and
/// [`bind_function`](Self::bind_function) are used by
/// [`execute_async`](Self::execute_async); [`execute_with`](Self::execute_with)
/// evaluates against an environment supplied by the caller instead.
#[derive(Debug)]
pub struct Expression {
    source: String,
    parsed: ExprNode,
    program: CompiledExpression,
    env: Environment,
}

impl Expression {
    /// Validate, parse and expand expression text
    pub fn new(source: &str) -> Result<Self> {
        let parsed = boolex_parser::parse(source)?;
        let program = CompiledExpression::compile(parsed.clone())?;
        let env = program.environment();

        log::debug!(
            "built expression '{}' ({} function(s), {} variable(s))",
            source,
            program.functions().len(),
            program.variables().len()
        );

        Ok(Self {
            source: source.to_string(),
            parsed,
            program,
            env,
        })
    }

    /// The text the expression was built from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The expanded tree
    pub fn tree(&self) -> &ExprNode {
        self.program.tree()
    }

    pub fn program(&self) -> &CompiledExpression {
        &self.program
    }

    /// Visit the expanded tree in pre-order
    pub fn preorder<F: FnMut(&ExprNode)>(&self, visit: F) {
        self.tree().preorder(visit);
    }

    /// Visit the expanded tree in post-order
    pub fn postorder<F: FnMut(&ExprNode)>(&self, visit: F) {
        self.tree().postorder(visit);
    }

    /// Render as a SQL boolean expression. Calls appear as written.
    pub fn to_sql(&self) -> Result<String> {
        boolex_sql::to_sql(&self.parsed)
    }

    /// The text with every connective chain in its own parentheses
    pub fn grouped(&self) -> String {
        self.parsed.to_string()
    }

    /// Function names in order of first appearance
    pub fn list_functions(&self) -> Vec<&str> {
        self.program.functions().iter().map(String::as_str).collect()
    }

    /// Variable names in order of first appearance
    pub fn list_variables(&self) -> Vec<&str> {
        self.program.variables().iter().map(String::as_str).collect()
    }

    /// Bind a value to a variable the expression uses
    pub fn bind_variable(&mut self, name: &str, value: impl Into<Value>) -> EvalResult<()> {
        self.env.bind_variable(name, value)
    }

    /// Bind a callable to a function the expression uses
    pub fn bind_function(&mut self, name: &str, function: impl Function + 'static) -> EvalResult<()> {
        self.env.bind_function(name, function)
    }

    /// The bindings used by [`execute_async`](Self::execute_async)
    pub fn bindings(&self) -> &Environment {
        &self.env
    }

    /// A fresh environment with every discovered name unbound
    pub fn environment(&self) -> Environment {
        self.program.environment()
    }

    /// Evaluate with the expression's own bindings
    pub async fn execute_async(&self) -> EvalResult<Value> {
        self.execute_with(&self.env).await
    }

    /// Evaluate with an external environment
    pub async fn execute_with(&self, env: &Environment) -> EvalResult<Value> {
        Evaluator::new(&self.program, env).evaluate().await
    }
}

impl FromStr for Expression {
    type Err = boolex_diagnostics::BoolexError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

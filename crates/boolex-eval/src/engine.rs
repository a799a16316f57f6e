//! boolex evaluation engine
//!
//! The [`Evaluator`] walks a compiled tree once, depth first. Operands are
//! awaited one after another in tree order, so bound functions observe a
//! deterministic call sequence.

use crate::context::Environment;
use crate::error::{EvalError, EvalResult};
use crate::operators::{compare, fold_connective, negate};
use crate::program::CompiledExpression;
use crate::value::Value;
use boolex_tree::{ExprNode, Operator, TokenKind};
use futures::future::{BoxFuture, FutureExt};

/// Evaluates a compiled expression against an environment
pub struct Evaluator<'a> {
    program: &'a CompiledExpression,
    env: &'a Environment,
}

impl<'a> Evaluator<'a> {
    pub fn new(program: &'a CompiledExpression, env: &'a Environment) -> Self {
        Self { program, env }
    }

    /// Evaluate the whole tree
    pub async fn evaluate(&self) -> EvalResult<Value> {
        let result = self.eval_node(self.program.tree(), 0).await;
        match &result {
            Ok(value) => log::debug!("evaluated to {}", value),
            Err(err) => log::debug!("evaluation failed: {}", err),
        }
        result
    }

    /// Evaluate a single node
    fn eval_node<'s>(&'s self, node: &'s ExprNode, depth: usize) -> BoxFuture<'s, EvalResult<Value>> {
        async move {
            let max_depth = self.env.max_depth();
            if depth > max_depth {
                return Err(EvalError::RecursionLimit { depth: max_depth });
            }

            let kind = self.program.classifier().classify(node.token());
            if let Some(op) = kind.operator() {
                return self.eval_operator(op, node, depth).await;
            }

            match kind {
                TokenKind::Function => self.eval_call(node, depth).await,
                _ if !node.is_leaf() => Err(EvalError::unsupported_operator(node.token())),
                TokenKind::Variable => self.env.variable(node.token()).cloned(),
                TokenKind::Unknown => Err(EvalError::unsupported_operator(node.token())),
                literal => literal_value(node.token(), literal),
            }
        }
        .boxed()
    }

    async fn eval_operator(&self, op: Operator, node: &ExprNode, depth: usize) -> EvalResult<Value> {
        let arity = op.arity();
        if !arity.accepts(node.children().len()) {
            return Err(EvalError::arity_mismatch(op.symbol(), arity, node.children().len()));
        }

        let operands = self.eval_children(node, depth).await?;
        match op {
            Operator::Not => negate(&operands[0]),
            Operator::Comparison(cmp) => compare(cmp, &operands[0], &operands[1]),
            Operator::Connective(conn) => fold_connective(conn, &operands),
        }
    }

    async fn eval_call(&self, node: &ExprNode, depth: usize) -> EvalResult<Value> {
        let name = node.token();
        let function = self.env.function(name)?;
        let args = self.eval_children(node, depth).await?;

        log::trace!("calling {} with {} argument(s)", name, args.len());
        function.call(args.len(), args).await
    }

    /// Evaluate children left to right, stopping at the first error
    async fn eval_children(&self, node: &ExprNode, depth: usize) -> EvalResult<Vec<Value>> {
        let mut values = Vec::with_capacity(node.children().len());
        for child in node.children() {
            values.push(self.eval_node(child, depth + 1).await?);
        }
        Ok(values)
    }
}

/// Read a literal leaf as a value
fn literal_value(token: &str, kind: TokenKind) -> EvalResult<Value> {
    match kind {
        TokenKind::String => token
            .strip_prefix('"')
            .and_then(|s| s.strip_suffix('"'))
            .map(Value::from)
            .ok_or_else(|| EvalError::invalid_literal(token)),
        TokenKind::Boolean => match token {
            "true" => Ok(Value::Boolean(true)),
            "false" => Ok(Value::Boolean(false)),
            _ => Err(EvalError::invalid_literal(token)),
        },
        TokenKind::Integer => token
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| EvalError::invalid_literal(token)),
        TokenKind::Float => token
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| EvalError::invalid_literal(token)),
        other => Err(EvalError::internal(format!(
            "token '{}' of kind {} is not a literal",
            token, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    async fn eval(source: &str) -> EvalResult<Value> {
        let program = CompiledExpression::from_source(source).unwrap();
        let env = program.environment();
        Evaluator::new(&program, &env).evaluate().await
    }

    #[rstest]
    #[case("3 > 2", true)]
    #[case("2.5 <= 2", false)]
    #[case("\"b\" > \"a\" & 1 == 1", true)]
    #[case("true == false | !false", true)]
    #[case("! (1 < 2 & 2 < 3)", false)]
    #[case("1 != 1.0", false)]
    #[tokio::test]
    async fn test_literal_expressions(#[case] source: &str, #[case] expected: bool) {
        assert_eq!(eval(source).await.unwrap(), Value::Boolean(expected));
    }

    #[tokio::test]
    async fn test_bare_literal() {
        assert_eq!(eval("\"hi\"").await.unwrap(), Value::from("hi"));
        assert_eq!(eval("-7").await.unwrap(), Value::Integer(-7));
    }

    #[tokio::test]
    async fn test_type_mismatch() {
        let err = eval("\"1\" < 2").await.unwrap_err();
        assert!(matches!(err, EvalError::TypeMismatch { .. }));

        let err = eval("1 & true").await.unwrap_err();
        assert!(matches!(err, EvalError::TypeMismatch { .. }));
    }

    #[tokio::test]
    async fn test_unbound_variable() {
        assert_eq!(eval("x > 1").await.unwrap_err(), EvalError::unbound_variable("x"));
    }

    #[tokio::test]
    async fn test_recursion_limit() {
        let program = CompiledExpression::from_source("! ! ! ! true").unwrap();
        let mut env = program.environment();
        env.set_max_depth(2);
        let err = Evaluator::new(&program, &env).evaluate().await.unwrap_err();
        assert_eq!(err, EvalError::RecursionLimit { depth: 2 });
    }

    #[test]
    fn test_literal_value() {
        assert_eq!(literal_value("\"\"", TokenKind::String).unwrap(), Value::from(""));
        assert_eq!(literal_value("1e2", TokenKind::Float).unwrap(), Value::Float(100.0));
        assert!(literal_value("x", TokenKind::Variable).is_err());
    }
}

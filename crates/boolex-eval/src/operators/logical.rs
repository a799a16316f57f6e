//! Logical operators
//!
//! Operands must be Boolean. `&` and `|` fold every operand left to right;
//! there is no short-circuit at this level because all operands have
//! already been evaluated.

use crate::error::{EvalError, EvalResult};
use crate::value::Value;
use boolex_tree::{Arity, Connective, Operator};

/// Evaluate `!`
pub fn negate(operand: &Value) -> EvalResult<Value> {
    match operand {
        Value::Boolean(b) => Ok(Value::Boolean(!b)),
        other => Err(EvalError::type_mismatch(Operator::NOT_SYMBOL, other.type_name())),
    }
}

/// Fold the operands of an `&` or `|` node
pub fn fold_connective(connective: Connective, operands: &[Value]) -> EvalResult<Value> {
    let mut acc: Option<bool> = None;

    for operand in operands {
        let Some(b) = operand.as_boolean() else {
            return Err(EvalError::type_mismatch(
                connective.symbol(),
                operand.type_name(),
            ));
        };
        acc = Some(match (acc, connective) {
            (None, _) => b,
            (Some(a), Connective::And) => a && b,
            (Some(a), Connective::Or) => a || b,
        });
    }

    acc.map(Value::Boolean)
        .ok_or_else(|| EvalError::arity_mismatch(connective.symbol(), Arity::AtLeast(2), 0))
}

//! Comparison operators
//!
//! | left    | right   | operators          |
//! |---------|---------|--------------------|
//! | Integer | Integer | all                |
//! | Float   | Float   | all                |
//! | Integer | Float   | all (exact)        |
//! | String  | String  | all (lexicographic)|
//! | Boolean | Boolean | `==`, `!=`         |
//! | Json    | Json    | `==`, `!=`         |
//!
//! Every other pairing is a type mismatch.

use crate::error::{EvalError, EvalResult};
use crate::value::Value;
use boolex_tree::Comparison;
use std::cmp::Ordering;

/// Apply a comparison to two evaluated operands
pub fn compare(op: Comparison, left: &Value, right: &Value) -> EvalResult<Value> {
    let result = match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => by_ordering(op, a.cmp(b)),
        (Value::String(a), Value::String(b)) => by_ordering(op, a.cmp(b)),
        (Value::Float(a), Value::Float(b)) => by_float(op, *a, *b),
        (Value::Integer(a), Value::Float(b)) => by_mixed(op, int_float_ordering(*a, *b)),
        (Value::Float(a), Value::Integer(b)) => {
            by_mixed(op, int_float_ordering(*b, *a).map(Ordering::reverse))
        }
        (Value::Boolean(a), Value::Boolean(b)) if !op.is_ordering() => by_equality(op, a == b),
        (Value::Json(a), Value::Json(b)) if !op.is_ordering() => by_equality(op, a == b),
        _ => {
            return Err(EvalError::binary_type_mismatch(
                op.symbol(),
                left.type_name(),
                right.type_name(),
            ));
        }
    };
    Ok(Value::Boolean(result))
}

fn by_ordering(op: Comparison, ordering: Ordering) -> bool {
    match op {
        Comparison::LessThan => ordering.is_lt(),
        Comparison::LessEqual => ordering.is_le(),
        Comparison::GreaterThan => ordering.is_gt(),
        Comparison::GreaterEqual => ordering.is_ge(),
        Comparison::Equal => ordering.is_eq(),
        Comparison::NotEqual => ordering.is_ne(),
    }
}

// IEEE semantics: NaN compares unequal to everything
fn by_float(op: Comparison, a: f64, b: f64) -> bool {
    match op {
        Comparison::LessThan => a < b,
        Comparison::LessEqual => a <= b,
        Comparison::GreaterThan => a > b,
        Comparison::GreaterEqual => a >= b,
        Comparison::Equal => a == b,
        Comparison::NotEqual => a != b,
    }
}

// A NaN operand leaves no ordering and behaves as in `by_float`
fn by_mixed(op: Comparison, ordering: Option<Ordering>) -> bool {
    match ordering {
        Some(ordering) => by_ordering(op, ordering),
        None => op == Comparison::NotEqual,
    }
}

/// Order an integer against a float without rounding the integer
fn int_float_ordering(int: i64, float: f64) -> Option<Ordering> {
    // 2^63, the first float past i64::MAX
    const I64_END: f64 = 9_223_372_036_854_775_808.0;

    if float.is_nan() {
        return None;
    }
    if float >= I64_END {
        return Some(Ordering::Less);
    }
    if float < -I64_END {
        return Some(Ordering::Greater);
    }

    let whole = float.trunc();
    let by_whole = int.cmp(&(whole as i64));
    if by_whole.is_ne() {
        return Some(by_whole);
    }
    0.0_f64.partial_cmp(&(float - whole))
}

fn by_equality(op: Comparison, equal: bool) -> bool {
    match op {
        Comparison::NotEqual => !equal,
        _ => equal,
    }
}

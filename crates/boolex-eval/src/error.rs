//! Evaluation errors for the boolex engine

use boolex_diagnostics::{
    BEX0201, BEX0202, BEX0203, BEX0204, BEX0205, BEX0206, BEX0207, BEX0208, BEX0209, BEX0400,
    BoolexError, ErrorCode,
};
use thiserror::Error;

/// Result type for evaluation operations
pub type EvalResult<T> = Result<T, EvalError>;

/// Errors that can occur during evaluation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EvalError {
    /// Variable read before being bound
    #[error("Unbound variable: {name}")]
    UnboundVariable { name: String },

    /// Function called before being bound
    #[error("Unbound function: {name}")]
    UnboundFunction { name: String },

    /// Binding for a name the expression does not use
    #[error("Unknown name: {name}")]
    UnknownName { name: String },

    /// Operator applied to values it does not accept
    #[error("Type mismatch for {operator}: cannot apply to {found}")]
    TypeMismatch { operator: String, found: String },

    /// Token with no evaluation rule
    #[error("Unsupported operator: {token}")]
    UnsupportedOperator { token: String },

    /// Operator node with the wrong number of operands
    #[error("Operator {operator} expects {expected} operand(s), found {found}")]
    ArityMismatch {
        operator: String,
        expected: String,
        found: usize,
    },

    /// Literal text that cannot be read as a value
    #[error("Invalid literal: {text}")]
    InvalidLiteral { text: String },

    /// Maximum recursion depth exceeded
    #[error("Maximum recursion depth {depth} exceeded")]
    RecursionLimit { depth: usize },

    /// Error reported by a bound function
    #[error("Function {name} failed: {message}")]
    FunctionFailed { name: String, message: String },

    /// Internal error (should not happen)
    #[error("Internal evaluation error: {message}")]
    Internal { message: String },
}

impl EvalError {
    pub fn unbound_variable(name: impl Into<String>) -> Self {
        Self::UnboundVariable { name: name.into() }
    }

    pub fn unbound_function(name: impl Into<String>) -> Self {
        Self::UnboundFunction { name: name.into() }
    }

    pub fn unknown_name(name: impl Into<String>) -> Self {
        Self::UnknownName { name: name.into() }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(operator: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            operator: operator.into(),
            found: found.into(),
        }
    }

    /// Create a type mismatch error for a pair of operands
    pub fn binary_type_mismatch(operator: impl Into<String>, left: &str, right: &str) -> Self {
        Self::type_mismatch(operator, format!("{} and {}", left, right))
    }

    pub fn unsupported_operator(token: impl Into<String>) -> Self {
        Self::UnsupportedOperator {
            token: token.into(),
        }
    }

    pub fn arity_mismatch(operator: impl Into<String>, expected: impl ToString, found: usize) -> Self {
        Self::ArityMismatch {
            operator: operator.into(),
            expected: expected.to_string(),
            found,
        }
    }

    pub fn invalid_literal(text: impl Into<String>) -> Self {
        Self::InvalidLiteral { text: text.into() }
    }

    /// Wrap a failure reported by a bound function
    pub fn function_failed(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::FunctionFailed {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Diagnostic code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnboundVariable { .. } => BEX0201,
            Self::UnboundFunction { .. } => BEX0202,
            Self::UnknownName { .. } => BEX0203,
            Self::TypeMismatch { .. } => BEX0204,
            Self::UnsupportedOperator { .. } => BEX0205,
            Self::ArityMismatch { .. } => BEX0206,
            Self::InvalidLiteral { .. } => BEX0207,
            Self::RecursionLimit { .. } => BEX0208,
            Self::FunctionFailed { .. } => BEX0209,
            Self::Internal { .. } => BEX0400,
        }
    }

    /// Check if the error is about a name with no binding
    pub fn is_unbound(&self) -> bool {
        matches!(
            self,
            Self::UnboundVariable { .. } | Self::UnboundFunction { .. } | Self::UnknownName { .. }
        )
    }
}

impl From<EvalError> for BoolexError {
    fn from(err: EvalError) -> Self {
        BoolexError::evaluation(err.code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(EvalError::unbound_variable("x").code(), BEX0201);
        assert_eq!(EvalError::binary_type_mismatch("<", "String", "Integer").code(), BEX0204);
        assert!(EvalError::unknown_name("q").is_unbound());
        assert!(!EvalError::internal("boom").is_unbound());
    }

    #[test]
    fn test_lift_into_boolex_error() {
        let err: BoolexError = EvalError::unbound_function("LEN").into();
        assert_eq!(err.code(), BEX0202);
        assert_eq!(err.to_string(), "BEX0202: Unbound function: LEN");
    }
}

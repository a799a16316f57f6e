//! boolex error codes following a structured numbering system
//!
//! Error code ranges:
//! - BEX0001-BEX0099: Validation errors (malformed input text)
//! - BEX0100-BEX0199: Structural errors (tree construction)
//! - BEX0200-BEX0299: Evaluation errors (runtime)
//! - BEX0400-BEX0499: Internal errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a validation error (0001-0099)
    pub const fn is_validation_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a structural error (0100-0199)
    pub const fn is_structural_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is an evaluation error (0200-0299)
    pub const fn is_evaluation_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is an internal error (0400-0499)
    pub const fn is_internal_error(&self) -> bool {
        self.0 >= 400 && self.0 < 500
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BEX{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

use std::collections::HashMap;
use std::sync::LazyLock;

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Validation errors (0001-0099)
    map.insert(1, ErrorInfo::new("Unbalanced parentheses"));
    map.insert(2, ErrorInfo::new("Doubled connective symbol")
        .with_help("Connectives are single characters: use `&` and `|`, not `&&` and `||`"));
    map.insert(3, ErrorInfo::new("Connective symbol not delimited by whitespace")
        .with_help("Put a space on at least one side of `!`, `&` and `|`"));

    // Structural errors (0100-0199)
    map.insert(100, ErrorInfo::new("Empty operand"));
    map.insert(101, ErrorInfo::new("Unexpected token"));
    map.insert(103, ErrorInfo::new("Invalid operator arity"));
    map.insert(104, ErrorInfo::new("Invalid function call"));
    map.insert(105, ErrorInfo::new("Unterminated string literal"));
    map.insert(106, ErrorInfo::new("Unsupported operator"));

    // Evaluation errors (0200-0299)
    map.insert(200, ErrorInfo::new("Evaluation failed"));
    map.insert(201, ErrorInfo::new("Unbound variable")
        .with_help("Bind every name returned by `list_variables` before executing"));
    map.insert(202, ErrorInfo::new("Unbound function")
        .with_help("Bind every name returned by `list_functions` before executing"));
    map.insert(203, ErrorInfo::new("Unknown name"));
    map.insert(204, ErrorInfo::new("Type mismatch"));
    map.insert(205, ErrorInfo::new("Unsupported operator"));
    map.insert(206, ErrorInfo::new("Invalid operator arity"));
    map.insert(207, ErrorInfo::new("Invalid literal"));
    map.insert(208, ErrorInfo::new("Recursion limit exceeded"));
    map.insert(209, ErrorInfo::new("External function failed"));

    // Internal errors (0400-0499)
    map.insert(400, ErrorInfo::new("Internal error"));

    map
});

// Validation errors
pub const BEX0001: ErrorCode = ErrorCode::new(1);
pub const BEX0002: ErrorCode = ErrorCode::new(2);
pub const BEX0003: ErrorCode = ErrorCode::new(3);

// Structural errors
pub const BEX0100: ErrorCode = ErrorCode::new(100);
pub const BEX0101: ErrorCode = ErrorCode::new(101);
pub const BEX0103: ErrorCode = ErrorCode::new(103);
pub const BEX0104: ErrorCode = ErrorCode::new(104);
pub const BEX0105: ErrorCode = ErrorCode::new(105);
pub const BEX0106: ErrorCode = ErrorCode::new(106);

// Evaluation errors
pub const BEX0200: ErrorCode = ErrorCode::new(200);
pub const BEX0201: ErrorCode = ErrorCode::new(201);
pub const BEX0202: ErrorCode = ErrorCode::new(202);
pub const BEX0203: ErrorCode = ErrorCode::new(203);
pub const BEX0204: ErrorCode = ErrorCode::new(204);
pub const BEX0205: ErrorCode = ErrorCode::new(205);
pub const BEX0206: ErrorCode = ErrorCode::new(206);
pub const BEX0207: ErrorCode = ErrorCode::new(207);
pub const BEX0208: ErrorCode = ErrorCode::new(208);
pub const BEX0209: ErrorCode = ErrorCode::new(209);

// Internal errors
pub const BEX0400: ErrorCode = ErrorCode::new(400);

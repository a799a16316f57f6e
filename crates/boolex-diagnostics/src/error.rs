//! boolex error types

use crate::{ErrorCode, SourceLocation, Span};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// The expression cannot be built or evaluated
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A diagnostic message with location and context
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    pub location: Option<SourceLocation>,
    /// Additional context or help
    pub help: Option<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic
    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            message: message.into(),
            location: None,
            help: None,
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        Ok(())
    }
}

/// Main boolex error type
#[derive(Debug, Clone, Error)]
pub enum BoolexError {
    /// Malformed input text, rejected before any tree is built
    #[error("{code}: {message}")]
    Validation {
        code: ErrorCode,
        message: String,
        expression: String,
        location: Option<SourceLocation>,
    },

    /// Tree construction invariant violated
    #[error("{code}: {message}")]
    Structural {
        code: ErrorCode,
        message: String,
        expression: String,
        location: Option<SourceLocation>,
        context: Option<String>,
    },

    /// Token with no known handling
    #[error("{code}: unsupported operator '{token}'")]
    Unsupported { code: ErrorCode, token: String },

    /// Evaluation failure lifted from the evaluator
    #[error("{code}: {message}")]
    Evaluation {
        code: ErrorCode,
        message: String,
        context: Option<String>,
    },

    /// Multiple errors collected
    #[error("Multiple errors: {}", .0.len())]
    Multiple(Vec<BoolexError>),
}

impl BoolexError {
    /// Create a validation error
    pub fn validation(
        code: ErrorCode,
        message: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            expression: expression.into(),
            location: None,
        }
    }

    /// Create a structural error
    pub fn structural(
        code: ErrorCode,
        message: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        Self::Structural {
            code,
            message: message.into(),
            expression: expression.into(),
            location: None,
            context: None,
        }
    }

    /// Create an unsupported-operator error
    pub fn unsupported(token: impl Into<String>) -> Self {
        Self::Unsupported {
            code: crate::BEX0106,
            token: token.into(),
        }
    }

    /// Create an evaluation error
    pub fn evaluation(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Evaluation {
            code,
            message: message.into(),
            context: None,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Validation { code, .. } => *code,
            Self::Structural { code, .. } => *code,
            Self::Unsupported { code, .. } => *code,
            Self::Evaluation { code, .. } => *code,
            Self::Multiple(errors) => errors.first().map(|e| e.code()).unwrap_or(ErrorCode::new(0)),
        }
    }

    /// Get the location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Validation { location, .. } => location.as_ref(),
            Self::Structural { location, .. } => location.as_ref(),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation { .. } => true,
            Self::Multiple(errors) => errors.iter().all(Self::is_validation),
            _ => false,
        }
    }

    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Structural { .. })
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Validation { code, message, location, .. } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(loc) = location {
                    diag = diag.with_location(loc.clone());
                }
                if let Some(help) = code.info().help {
                    diag = diag.with_help(help);
                }
                diag
            }
            Self::Structural { code, message, location, context, .. } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(loc) = location {
                    diag = diag.with_location(loc.clone());
                }
                if let Some(ctx) = context {
                    diag = diag.with_help(ctx.clone());
                } else if let Some(help) = code.info().help {
                    diag = diag.with_help(help);
                }
                diag
            }
            Self::Unsupported { code, token } => {
                Diagnostic::error(*code, format!("unsupported operator '{}'", token))
            }
            Self::Evaluation { code, message, context } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(ctx) = context {
                    diag = diag.with_help(ctx.clone());
                }
                diag
            }
            Self::Multiple(errors) => {
                if let Some(first) = errors.first() {
                    first.to_diagnostic()
                } else {
                    Diagnostic::error(ErrorCode::new(0), "Unknown error")
                }
            }
        }
    }
}

/// Builder for creating boolex errors with fluent API
pub struct ErrorBuilder {
    code: ErrorCode,
    message: String,
    location: Option<SourceLocation>,
    context: Option<String>,
}

impl ErrorBuilder {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            location: None,
            context: None,
        }
    }

    /// Set the span (converts to location)
    pub fn span(mut self, span: Span, source: &str) -> Self {
        self.location = Some(SourceLocation::from_span(span, source));
        self
    }

    /// Add context information
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Build a validation error
    pub fn validation(self, expression: impl Into<String>) -> BoolexError {
        BoolexError::Validation {
            code: self.code,
            message: self.message,
            expression: expression.into(),
            location: self.location,
        }
    }

    /// Build a structural error
    pub fn structural(self, expression: impl Into<String>) -> BoolexError {
        BoolexError::Structural {
            code: self.code,
            message: self.message,
            expression: expression.into(),
            location: self.location,
            context: self.context,
        }
    }
}

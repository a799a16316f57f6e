//! Token classification vocabulary

use crate::{Comparison, Connective, Operator};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of a token as seen by the evaluator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    LessThan,
    LessEqual,
    GreaterThan,
    GreaterEqual,
    Equal,
    NotEqual,
    And,
    Or,
    Not,
    Function,
    String,
    Boolean,
    Integer,
    Float,
    Variable,
    Unknown,
}

impl TokenKind {
    pub const fn of_operator(op: Operator) -> Self {
        match op {
            Operator::Not => Self::Not,
            Operator::Connective(Connective::And) => Self::And,
            Operator::Connective(Connective::Or) => Self::Or,
            Operator::Comparison(Comparison::LessThan) => Self::LessThan,
            Operator::Comparison(Comparison::LessEqual) => Self::LessEqual,
            Operator::Comparison(Comparison::GreaterThan) => Self::GreaterThan,
            Operator::Comparison(Comparison::GreaterEqual) => Self::GreaterEqual,
            Operator::Comparison(Comparison::Equal) => Self::Equal,
            Operator::Comparison(Comparison::NotEqual) => Self::NotEqual,
        }
    }

    /// Inverse of [`TokenKind::of_operator`]
    pub const fn operator(&self) -> Option<Operator> {
        Some(match self {
            Self::Not => Operator::Not,
            Self::And => Operator::Connective(Connective::And),
            Self::Or => Operator::Connective(Connective::Or),
            Self::LessThan => Operator::Comparison(Comparison::LessThan),
            Self::LessEqual => Operator::Comparison(Comparison::LessEqual),
            Self::GreaterThan => Operator::Comparison(Comparison::GreaterThan),
            Self::GreaterEqual => Operator::Comparison(Comparison::GreaterEqual),
            Self::Equal => Operator::Comparison(Comparison::Equal),
            Self::NotEqual => Operator::Comparison(Comparison::NotEqual),
            _ => return None,
        })
    }

    pub const fn is_operator(&self) -> bool {
        self.operator().is_some()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LessThan => "LESS_THAN",
            Self::LessEqual => "LESS_EQUAL",
            Self::GreaterThan => "GREATER_THAN",
            Self::GreaterEqual => "GREATER_EQUAL",
            Self::Equal => "EQUAL",
            Self::NotEqual => "NOT_EQUAL",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Function => "FUNCTION",
            Self::String => "STRING",
            Self::Boolean => "BOOLEAN",
            Self::Integer => "INTEGER",
            Self::Float => "FLOAT",
            Self::Variable => "VARIABLE",
            Self::Unknown => "UNKNOWN",
        };
        f.write_str(name)
    }
}

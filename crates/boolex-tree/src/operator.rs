//! boolex operators

use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// Less than
    LessThan,
    /// Less than or equal
    LessEqual,
    /// Greater than
    GreaterThan,
    /// Greater than or equal
    GreaterEqual,
    /// Equality
    Equal,
    /// Inequality
    NotEqual,
}

impl Comparison {
    /// Order in which symbols are matched against the input.
    ///
    /// Two-character symbols come first so `<=` is never read as `<` followed by `=`.
    pub const SEARCH_ORDER: [Comparison; 6] = [
        Self::GreaterEqual,
        Self::LessEqual,
        Self::Equal,
        Self::NotEqual,
        Self::LessThan,
        Self::GreaterThan,
    ];

    /// Get the operator symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::LessEqual => "<=",
            Self::GreaterThan => ">",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        }
    }

    /// Get the SQL spelling of the operator
    pub const fn sql_symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "<>",
            other => other.symbol(),
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::SEARCH_ORDER.into_iter().find(|c| c.symbol() == symbol)
    }

    /// Check if the comparison only makes sense for ordered operands
    pub const fn is_ordering(&self) -> bool {
        !matches!(self, Self::Equal | Self::NotEqual)
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Logical connectives joining two or more operands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Connective {
    /// Logical and
    And,
    /// Logical or
    Or,
}

impl Connective {
    pub const fn symbol_char(&self) -> char {
        match self {
            Self::And => '&',
            Self::Or => '|',
        }
    }

    /// Get the operator symbol
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::And => "&",
            Self::Or => "|",
        }
    }

    /// Get the SQL keyword for the connective
    pub const fn sql_keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Number of children an operator node must carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    pub const fn accepts(&self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == *n,
            Self::AtLeast(n) => count >= *n,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {}", n),
            Self::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

/// Every operator that may appear as an internal node token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Logical negation (`!`)
    Not,
    Comparison(Comparison),
    Connective(Connective),
}

impl Operator {
    /// The negation symbol
    pub const NOT_SYMBOL: &'static str = "!";

    /// Recognize an operator token. Any other text is a leaf or a function name.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "!" => Some(Self::Not),
            "&" => Some(Self::Connective(Connective::And)),
            "|" => Some(Self::Connective(Connective::Or)),
            other => Comparison::from_symbol(other).map(Self::Comparison),
        }
    }

    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Not => Self::NOT_SYMBOL,
            Self::Comparison(c) => c.symbol(),
            Self::Connective(c) => c.symbol(),
        }
    }

    pub const fn arity(&self) -> Arity {
        match self {
            Self::Not => Arity::Exactly(1),
            Self::Comparison(_) => Arity::Exactly(2),
            Self::Connective(_) => Arity::AtLeast(2),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("!", Some(Operator::Not))]
    #[case("&", Some(Operator::Connective(Connective::And)))]
    #[case("|", Some(Operator::Connective(Connective::Or)))]
    #[case("<=", Some(Operator::Comparison(Comparison::LessEqual)))]
    #[case("!=", Some(Operator::Comparison(Comparison::NotEqual)))]
    #[case("=", None)]
    #[case("&&", None)]
    #[case("CONCAT", None)]
    fn test_from_token(#[case] token: &str, #[case] expected: Option<Operator>) {
        assert_eq!(Operator::from_token(token), expected);
    }

    #[test]
    fn test_search_order_prefers_two_char_symbols() {
        let symbols: Vec<_> = Comparison::SEARCH_ORDER.iter().map(|c| c.symbol()).collect();
        assert_eq!(symbols, [">=", "<=", "==", "!=", "<", ">"]);
    }

    #[test]
    fn test_sql_symbols() {
        assert_eq!(Comparison::Equal.sql_symbol(), "=");
        assert_eq!(Comparison::NotEqual.sql_symbol(), "<>");
        assert_eq!(Comparison::GreaterEqual.sql_symbol(), ">=");
        assert_eq!(Connective::Or.sql_keyword(), "OR");
    }

    #[test]
    fn test_arity() {
        assert!(Operator::Not.arity().accepts(1));
        assert!(!Operator::Not.arity().accepts(2));
        assert!(Operator::Connective(Connective::And).arity().accepts(5));
        assert!(!Operator::Comparison(Comparison::Equal).arity().accepts(3));
    }
}

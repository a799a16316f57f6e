//! Token classification with a per-expression cache

use boolex_tree::{Operator, TokenKind};
use indexmap::IndexSet;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Classifies token text into a [`TokenKind`].
///
/// The function names are fixed when the classifier is built, so a cached
/// answer never goes stale.
#[derive(Debug, Default)]
pub struct TokenClassifier {
    functions: IndexSet<String>,
    cache: RwLock<HashMap<String, TokenKind>>,
}

impl TokenClassifier {
    pub fn new(functions: IndexSet<String>) -> Self {
        Self {
            functions,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Classify a token, consulting the cache first
    pub fn classify(&self, token: &str) -> TokenKind {
        let cached = self.cache.read().get(token).copied();
        if let Some(kind) = cached {
            return kind;
        }

        let kind = self.classify_uncached(token);
        log::trace!("classified '{}' as {}", token, kind);
        self.cache.write().insert(token.to_string(), kind);
        kind
    }

    /// Classify a token without touching the cache
    pub fn classify_uncached(&self, token: &str) -> TokenKind {
        if let Some(op) = Operator::from_token(token) {
            return TokenKind::of_operator(op);
        }
        if token.len() >= 2 && token.starts_with('"') && token.ends_with('"') {
            return TokenKind::String;
        }
        if token.is_empty() || token.contains('"') {
            return TokenKind::Unknown;
        }
        if token == "true" || token == "false" {
            return TokenKind::Boolean;
        }
        if token.parse::<i64>().is_ok() {
            return TokenKind::Integer;
        }
        if looks_numeric(token) && token.parse::<f64>().is_ok() {
            return TokenKind::Float;
        }
        if self.functions.contains(token) {
            return TokenKind::Function;
        }
        TokenKind::Variable
    }

    pub fn functions(&self) -> &IndexSet<String> {
        &self.functions
    }

    /// Number of distinct tokens classified so far
    pub fn cached_len(&self) -> usize {
        self.cache.read().len()
    }
}

// Keeps names like `inf` or `NaN` out of the float literals
fn looks_numeric(token: &str) -> bool {
    token.starts_with(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
        && token.contains(|c: char| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn classifier() -> TokenClassifier {
        TokenClassifier::new(["CONCAT".to_string(), "LEN".to_string()].into_iter().collect())
    }

    #[rstest]
    #[case(">=", TokenKind::GreaterEqual)]
    #[case("!", TokenKind::Not)]
    #[case("|", TokenKind::Or)]
    #[case("\"hello\"", TokenKind::String)]
    #[case("\"\"", TokenKind::String)]
    #[case("\"", TokenKind::Unknown)]
    #[case("ab\"c", TokenKind::Unknown)]
    #[case("", TokenKind::Unknown)]
    #[case("true", TokenKind::Boolean)]
    #[case("False", TokenKind::Variable)]
    #[case("-42", TokenKind::Integer)]
    #[case("3.25", TokenKind::Float)]
    #[case("1e3", TokenKind::Float)]
    #[case("inf", TokenKind::Variable)]
    #[case("NaN", TokenKind::Variable)]
    #[case("CONCAT", TokenKind::Function)]
    #[case("x_1", TokenKind::Variable)]
    fn test_classify(#[case] token: &str, #[case] expected: TokenKind) {
        assert_eq!(classifier().classify_uncached(token), expected);
    }

    #[test]
    fn test_cache_is_populated_once_per_token() {
        let c = classifier();
        assert_eq!(c.classify("x"), TokenKind::Variable);
        assert_eq!(c.classify("x"), TokenKind::Variable);
        assert_eq!(c.classify("LEN"), TokenKind::Function);
        assert_eq!(c.cached_len(), 2);
    }
}

//! boolex parser using Winnow
//!
//! This crate turns expression text into an [`ExprNode`] tree. Text is first
//! checked by the validator, then parsed by a recursive descent parser with
//! precedence climbing (`!` binds tightest, then comparisons, then `&`, then `|`).

mod call;
mod combinators;
mod expression;
mod validate;

pub use call::split_call;
pub use validate::{is_valid, validate, validate_all};

use boolex_diagnostics::{
    BEX0100, BEX0101, BEX0104, BEX0105, BEX0400, BoolexError, ErrorBuilder, ErrorCode,
    Result, Span,
};
use boolex_tree::ExprNode;
use winnow::error::{ContextError, StrContext};

/// Parser mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParseMode {
    /// Fast mode - fail on first error
    #[default]
    Fast,
    /// Analysis mode - report every validation violation
    Analysis,
}

/// Parse result with optional errors
#[derive(Debug)]
pub struct ParseResult {
    /// Parsed tree, absent when any error was found
    pub tree: Option<ExprNode>,
    pub errors: Vec<BoolexError>,
}

impl ParseResult {
    pub fn success(tree: ExprNode) -> Self {
        Self {
            tree: Some(tree),
            errors: Vec::new(),
        }
    }

    pub fn error(errors: Vec<BoolexError>) -> Self {
        Self { tree: None, errors }
    }

    /// Check if parsing succeeded without errors
    pub fn is_success(&self) -> bool {
        self.tree.is_some() && self.errors.is_empty()
    }

    /// Convert to Result, returning the single error or all of them
    pub fn into_result(self) -> Result<ExprNode> {
        let mut errors = self.errors;
        match errors.len() {
            0 => self.tree.ok_or_else(|| {
                BoolexError::structural(BEX0400, "parse produced neither a tree nor an error", "")
            }),
            1 => Err(errors.remove(0)),
            _ => Err(BoolexError::Multiple(errors)),
        }
    }
}

/// Validate and parse expression text into a tree
pub fn parse(source: &str) -> Result<ExprNode> {
    validate(source)?;
    parse_fragment(source)
}

/// Parse text that has already been validated, such as a call argument
pub fn parse_fragment(source: &str) -> Result<ExprNode> {
    let mut input = source;
    let parsed = expression::expression(&mut input);
    let tree = parsed.map_err(|err| structural_error(source, input, &err))?;
    tree.check_arity()?;
    log::trace!("parsed '{}' into {} node(s)", source, tree.len());
    Ok(tree)
}

/// Parse with the specified mode
///
/// In Fast mode: stops at the first error.
/// In Analysis mode: every validation violation is reported before giving up.
pub fn parse_with_mode(source: &str, mode: ParseMode) -> ParseResult {
    let validation = match mode {
        ParseMode::Fast => validate(source).err().into_iter().collect(),
        ParseMode::Analysis => validate_all(source),
    };
    if !validation.is_empty() {
        return ParseResult::error(validation);
    }

    match parse_fragment(source) {
        Ok(tree) => ParseResult::success(tree),
        Err(err) => ParseResult::error(vec![err]),
    }
}

/// Rewrite the text so every connective chain carries its own parentheses.
///
/// `a & b | c` becomes `((a & b) | c)`. The result parses to the same tree,
/// so applying the rewrite twice changes nothing.
pub fn add_explicit_grouping(source: &str) -> Result<String> {
    Ok(parse(source)?.to_string())
}

fn structural_error(source: &str, rest: &str, err: &ContextError) -> BoolexError {
    let label = err
        .context()
        .find_map(|c| match c {
            StrContext::Label(label) => Some(*label),
            _ => None,
        })
        .unwrap_or(expression::UNEXPECTED_TOKEN);

    let offset = source.len() - rest.len();
    let near = rest.chars().next().map_or_else(|| "end of input".to_string(), |c| format!("'{}'", c));

    ErrorBuilder::new(label_code(label), format!("{} at {}", label, near))
        .span(Span::new(offset, (offset + 1).min(source.len())), source)
        .context(format!("while parsing '{}'", source))
        .structural(source)
}

fn label_code(label: &str) -> ErrorCode {
    match label {
        expression::EMPTY_OPERAND => BEX0100,
        expression::UNTERMINATED_CALL => BEX0104,
        expression::UNTERMINATED_STRING => BEX0105,
        _ => BEX0101,
    }
}

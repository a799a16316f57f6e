//! Expression parser using recursive descent with precedence climbing
//!
//! Precedence from loosest to tightest: `|`, `&`, comparisons, `!`.
//! Chains of one connective collapse into a single n-ary node, and a run of
//! comparisons is split by operator priority rather than by position.

use crate::combinators::{Input, PResult, fail_with, is_word_char, quoted_string, word, ws};
use boolex_tree::{Comparison, Connective, ExprNode, Operator};
use winnow::combinator::{eof, opt};
use winnow::error::StrContext;
use winnow::prelude::*;
use winnow::token::literal;

pub(crate) const EMPTY_OPERAND: &str = "empty operand";
pub(crate) const UNEXPECTED_TOKEN: &str = "unexpected token";
pub(crate) const UNTERMINATED_STRING: &str = "unterminated string literal";
pub(crate) const UNTERMINATED_CALL: &str = "unterminated function call";
pub(crate) const MISSING_CLOSE_PAREN: &str = "expected ')'";
pub(crate) const TRAILING_INPUT: &str = "trailing input";

/// Parse a complete expression, rejecting trailing input
pub(crate) fn expression(input: &mut Input<'_>) -> PResult<ExprNode> {
    let node = or_expression(input)?;
    ws.parse_next(input)?;
    eof.context(StrContext::Label(TRAILING_INPUT)).parse_next(input)?;
    Ok(node)
}

/// Parse `|` chain (lowest precedence)
fn or_expression(input: &mut Input<'_>) -> PResult<ExprNode> {
    connective_chain(input, Connective::Or, and_expression)
}

/// Parse `&` chain
fn and_expression(input: &mut Input<'_>) -> PResult<ExprNode> {
    connective_chain(input, Connective::And, comparison_expression)
}

fn connective_chain(
    input: &mut Input<'_>,
    connective: Connective,
    operand: fn(&mut Input<'_>) -> PResult<ExprNode>,
) -> PResult<ExprNode> {
    let mut operands = vec![operand(input)?];

    loop {
        ws.parse_next(input)?;
        if opt(connective.symbol_char()).parse_next(input)?.is_none() {
            break;
        }
        operands.push(operand(input)?);
    }

    if operands.len() == 1 {
        return Ok(operands.swap_remove(0));
    }
    Ok(ExprNode::with_children(connective.symbol(), operands))
}

/// Parse a run of comparisons such as `a < b == c`
fn comparison_expression(input: &mut Input<'_>) -> PResult<ExprNode> {
    let mut operands = vec![unary_expression(input)?];
    let mut operators = Vec::new();

    loop {
        ws.parse_next(input)?;
        let Some(op) = comparison_operator(input)? else {
            break;
        };
        operators.push(op);
        operands.push(unary_expression(input)?);
    }

    Ok(split_comparisons(operands, &operators))
}

/// Split a comparison run at the first occurrence of the operator that comes
/// earliest in [`Comparison::SEARCH_ORDER`], then split each side the same way.
/// `operands` always holds one more element than `operators`.
fn split_comparisons(mut operands: Vec<ExprNode>, operators: &[Comparison]) -> ExprNode {
    let split = Comparison::SEARCH_ORDER
        .iter()
        .find_map(|op| operators.iter().position(|o| o == op));
    let Some(at) = split else {
        return operands.swap_remove(0);
    };

    let right_operands = operands.split_off(at + 1);
    let left = split_comparisons(operands, &operators[..at]);
    let right = split_comparisons(right_operands, &operators[at + 1..]);
    ExprNode::with_children(operators[at].symbol(), vec![left, right])
}

fn comparison_operator(input: &mut Input<'_>) -> PResult<Option<Comparison>> {
    for op in Comparison::SEARCH_ORDER {
        if opt(literal(op.symbol())).parse_next(input)?.is_some() {
            return Ok(Some(op));
        }
    }
    Ok(None)
}

/// Parse `!` prefix; `!=` is left for the comparison level.
///
/// `! x` negates the next operand only. When the `!` is directly followed by
/// text, the whole run up to the next top-level whitespace is negated, so
/// `!x>3` is `!(x>3)` while `!x > 3` is `(!x) > 3`.
fn unary_expression(input: &mut Input<'_>) -> PResult<ExprNode> {
    ws.parse_next(input)?;

    if input.starts_with('!') && !input.starts_with("!=") {
        '!'.parse_next(input)?;
        let operand = if input.starts_with(char::is_whitespace) {
            unary_expression(input)?
        } else {
            attached_operand(input)?
        };
        return Ok(ExprNode::with_children(Operator::NOT_SYMBOL, vec![operand]));
    }

    primary(input)
}

/// Parse the run directly after a `!` as one comparison-level operand
fn attached_operand(input: &mut Input<'_>) -> PResult<ExprNode> {
    let start = *input;
    let len = attached_run_len(start);
    let mut run = &start[..len];

    let parsed = comparison_expression(&mut run).and_then(|node| {
        ws.parse_next(&mut run)?;
        if run.is_empty() {
            Ok(node)
        } else {
            fail_with(&mut run, UNEXPECTED_TOKEN)
        }
    });

    *input = &start[len - run.len()..];
    parsed
}

/// Length of the text up to the first whitespace, `&`, `|` or unmatched `)`
/// outside quotes and nested parentheses
fn attached_run_len(text: &str) -> usize {
    let mut depth = 0usize;
    let mut quoted = false;

    for (i, c) in text.char_indices() {
        match c {
            '"' => quoted = !quoted,
            _ if quoted => {}
            '(' => depth += 1,
            ')' if depth == 0 => return i,
            ')' => depth -= 1,
            '&' | '|' if depth == 0 => return i,
            c if c.is_whitespace() && depth == 0 => return i,
            _ => {}
        }
    }
    text.len()
}

/// Parse a parenthesized group or a leaf
fn primary(input: &mut Input<'_>) -> PResult<ExprNode> {
    ws.parse_next(input)?;

    if opt('(').parse_next(input)?.is_some() {
        let inner = or_expression(input)?;
        ws.parse_next(input)?;
        if opt(')').parse_next(input)?.is_none() {
            return fail_with(input, MISSING_CLOSE_PAREN);
        }
        return Ok(inner);
    }

    leaf(input)
}

fn leaf(input: &mut Input<'_>) -> PResult<ExprNode> {
    if input.starts_with('"') {
        return quoted_string.map(ExprNode::leaf).parse_next(input);
    }

    let at_operand_boundary =
        input.is_empty() || input.starts_with([')', '&', '|', ',']);
    if at_operand_boundary {
        return fail_with(input, EMPTY_OPERAND);
    }

    if !input.starts_with(is_word_char) {
        return fail_with(input, UNEXPECTED_TOKEN);
    }
    word.map(ExprNode::leaf).parse_next(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> ExprNode {
        let mut input = text;
        expression(&mut input).unwrap_or_else(|e| panic!("failed to parse '{}': {:?}", text, e))
    }

    fn leaf(token: &str) -> ExprNode {
        ExprNode::leaf(token)
    }

    #[test]
    fn test_single_leaf() {
        assert_eq!(parse("  x  "), leaf("x"));
        assert_eq!(parse("((x))"), leaf("x"));
    }

    #[test]
    fn test_n_ary_chain() {
        let tree = parse("a & b & c");
        assert_eq!(tree.token(), "&");
        assert_eq!(tree.children().len(), 3);
    }

    #[test]
    fn test_explicit_subchain_stays_nested() {
        let tree = parse("a & (b & c)");
        assert_eq!(tree.children().len(), 2);
        assert_eq!(tree.children()[1].token(), "&");
    }

    #[test]
    fn test_spaced_not_binds_tighter_than_comparison() {
        let tree = parse("!x > 3");
        assert_eq!(tree.token(), ">");
        assert_eq!(tree.children()[0].token(), "!");
    }

    #[test]
    fn test_attached_not_takes_whole_run() {
        let tree = parse("!x>3");
        assert_eq!(tree.token(), "!");
        assert_eq!(tree.children()[0].token(), ">");
        assert_eq!(tree.children()[0].children(), [leaf("x"), leaf("3")]);
    }

    #[test]
    fn test_not_equal_is_not_negation() {
        let tree = parse("x != 3");
        assert_eq!(tree.token(), "!=");
        assert_eq!(tree.children(), [leaf("x"), leaf("3")]);
    }

    #[test]
    fn test_comparison_run_splits_at_highest_priority() {
        let tree = parse("a < b < c");
        assert_eq!(tree.token(), "<");
        assert_eq!(tree.children()[0], leaf("a"));
        assert_eq!(tree.children()[1].token(), "<");

        let tree = parse("flag == x < 3");
        assert_eq!(tree.token(), "==");
        assert_eq!(tree.children()[1].children(), [leaf("x"), leaf("3")]);
    }

    #[test]
    fn test_attached_run_len() {
        assert_eq!(attached_run_len("x>3 & y"), 3);
        assert_eq!(attached_run_len("f(a, b)==1)"), 10);
        assert_eq!(attached_run_len("\"a b\"|c"), 5);
        assert_eq!(attached_run_len(""), 0);
    }

    #[test]
    fn test_trailing_input() {
        let mut input = "a b";
        let err = expression(&mut input).unwrap_err();
        assert!(err.context().any(|c| matches!(c, StrContext::Label(TRAILING_INPUT))));
    }
}

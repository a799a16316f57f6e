//! Lexical parsers shared by the expression grammar

use winnow::combinator::{fail, opt};
use winnow::error::{ContextError, StrContext};
use winnow::prelude::*;
use winnow::token::{take, take_till, take_while};

pub(crate) type Input<'a> = &'a str;
pub(crate) type PResult<T> = Result<T, ContextError>;

/// Characters that end a bare word
const DELIMITERS: &str = "()&|<>=!,\"";

/// Skip whitespace
pub(crate) fn ws(input: &mut Input<'_>) -> PResult<()> {
    take_while(0.., char::is_whitespace).void().parse_next(input)
}

/// Fail at the current position with a label naming what went wrong
pub(crate) fn fail_with<T>(input: &mut Input<'_>, label: &'static str) -> PResult<T> {
    fail.context(StrContext::Label(label)).parse_next(input)
}

pub(crate) fn is_word_char(c: char) -> bool {
    !c.is_whitespace() && !DELIMITERS.contains(c)
}

/// A double-quoted string, quotes included
pub(crate) fn quoted_string<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    let start = *input;
    '"'.parse_next(input)?;
    take_till(0.., '"').parse_next(input)?;
    if opt('"').parse_next(input)?.is_none() {
        *input = start;
        return fail_with(input, crate::expression::UNTERMINATED_STRING);
    }
    Ok(&start[..start.len() - input.len()])
}

/// A parenthesized group with balanced parentheses, quote-aware
pub(crate) fn balanced_group<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    let text: &'a str = *input;
    let mut depth = 0usize;
    let mut quoted = false;

    for (i, c) in text.char_indices() {
        match c {
            '"' => quoted = !quoted,
            '(' if !quoted => depth += 1,
            ')' if !quoted => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return take(i + 1).parse_next(input);
                }
            }
            _ => {}
        }
    }

    fail_with(input, crate::expression::UNTERMINATED_CALL)
}

/// A bare word, extended by a directly attached call group: `x`, `3.5`, `f(a, (b))`
pub(crate) fn word<'a>(input: &mut Input<'a>) -> PResult<&'a str> {
    let start = *input;
    take_while(1.., is_word_char).parse_next(input)?;
    if input.starts_with('(') {
        balanced_group(input)?;
    }
    Ok(&start[..start.len() - input.len()])
}

//! Character-level checks run before any tree is built

use boolex_diagnostics::{BEX0001, BEX0002, BEX0003, BoolexError, ErrorBuilder, Result, Span};

const CONNECTIVES: [char; 3] = ['!', '&', '|'];

/// Check whether the text passes every validation rule
pub fn is_valid(text: &str) -> bool {
    validate(text).is_ok()
}

/// Validate the text, returning the first violation found
pub fn validate(text: &str) -> Result<()> {
    match validate_all(text).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Validate the text, returning every violation in rule order
pub fn validate_all(text: &str) -> Vec<BoolexError> {
    let mut errors = Vec::new();
    check_balance(text, &mut errors);
    check_doubled(text, &mut errors);
    check_spacing(text, &mut errors);
    if !errors.is_empty() {
        log::debug!("'{}' failed validation with {} violation(s)", text, errors.len());
    }
    errors
}

/// Opening and closing parentheses must cancel out. A `)` seen before its
/// `(` is accepted as long as the totals match.
fn check_balance(text: &str, errors: &mut Vec<BoolexError>) {
    let mut open = Vec::new();
    let mut stray_close = None;
    let mut depth: isize = 0;

    for (i, c) in text.char_indices() {
        match c {
            '(' => {
                depth += 1;
                open.push(i);
            }
            ')' => {
                depth -= 1;
                if open.pop().is_none() && stray_close.is_none() {
                    stray_close = Some(i);
                }
            }
            _ => {}
        }
    }

    let offending = match depth {
        0 => return,
        d if d > 0 => open.last().copied(),
        _ => stray_close,
    };
    let offset = offending.unwrap_or(0);
    errors.push(
        ErrorBuilder::new(BEX0001, format!("unbalanced parentheses (net depth {})", depth))
            .span(Span::single(offset), text)
            .validation(text),
    );
}

fn check_doubled(text: &str, errors: &mut Vec<BoolexError>) {
    let mut prev: Option<char> = None;
    for (i, c) in text.char_indices() {
        if CONNECTIVES.contains(&c) && prev == Some(c) {
            errors.push(
                ErrorBuilder::new(BEX0002, format!("doubled connective '{}{}'", c, c))
                    .span(Span::new(i - c.len_utf8(), i + c.len_utf8()), text)
                    .validation(text),
            );
        }
        prev = Some(c);
    }
}

/// Every `!`, `&`, `|` away from the ends needs whitespace on one side
fn check_spacing(text: &str, errors: &mut Vec<BoolexError>) {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    if chars.len() < 3 {
        return;
    }

    for window in chars.windows(3) {
        let [(_, before), (offset, c), (_, after)] = window else {
            continue;
        };
        if CONNECTIVES.contains(c) && !before.is_whitespace() && !after.is_whitespace() {
            errors.push(
                ErrorBuilder::new(BEX0003, format!("'{}' must be separated by whitespace", c))
                    .span(Span::single(*offset), text)
                    .validation(text),
            );
        }
    }
}

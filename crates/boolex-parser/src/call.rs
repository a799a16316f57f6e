//! Splitting of call syntax `name(arg, arg, ...)`

use boolex_diagnostics::{BEX0104, BoolexError, ErrorBuilder, Result, Span};

/// Split call text into its function name and raw argument texts.
///
/// Arguments are separated by commas outside nested parentheses and quoted
/// strings, and are returned trimmed. `f()` has no arguments.
pub fn split_call(text: &str) -> Result<(&str, Vec<&str>)> {
    let Some(open) = text.find('(') else {
        return Err(call_error(text, 0, "missing '(' in function call"));
    };

    let name = text[..open].trim();
    if name.is_empty() {
        return Err(call_error(text, open, "function call without a name"));
    }

    let mut depth = 0usize;
    let mut quoted = false;
    let mut close = None;
    let mut commas = Vec::new();

    for (i, c) in text[open..].char_indices() {
        let at = open + i;
        match c {
            '"' => quoted = !quoted,
            _ if quoted => {}
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    close = Some(at);
                    break;
                }
            }
            ',' if depth == 1 => commas.push(at),
            _ => {}
        }
    }

    let Some(close) = close else {
        return Err(call_error(text, text.len().saturating_sub(1), "missing ')' in function call"));
    };
    if !text[close + 1..].trim().is_empty() {
        return Err(call_error(text, close + 1, "unexpected text after function call"));
    }

    let interior = &text[open + 1..close];
    if interior.trim().is_empty() {
        return Ok((name, Vec::new()));
    }

    let mut args = Vec::with_capacity(commas.len() + 1);
    let mut start = open + 1;
    for comma in commas {
        args.push(text[start..comma].trim());
        start = comma + 1;
    }
    args.push(text[start..close].trim());

    Ok((name, args))
}

fn call_error(text: &str, offset: usize, message: &str) -> BoolexError {
    ErrorBuilder::new(BEX0104, message)
        .span(Span::single(offset), text)
        .structural(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_simple_call() {
        let (name, args) = split_call("CONCAT(\"a\", \"b\")").unwrap();
        assert_eq!(name, "CONCAT");
        assert_eq!(args, ["\"a\"", "\"b\""]);
    }

    #[test]
    fn test_nested_commas_stay_inside() {
        let (name, args) = split_call("f(g(1, 2), \"x, y\", h())").unwrap();
        assert_eq!(name, "f");
        assert_eq!(args, ["g(1, 2)", "\"x, y\"", "h()"]);
    }

    #[test]
    fn test_empty_argument_list() {
        let (name, args) = split_call("NOW( )").unwrap();
        assert_eq!(name, "NOW");
        assert!(args.is_empty());
    }

    #[test]
    fn test_malformed_calls() {
        for text in ["(1)", "f(1", "f(1) x", "plain"] {
            let err = split_call(text).unwrap_err();
            assert_eq!(err.code(), BEX0104, "wrong code for '{}'", text);
        }
    }
}

//! Tests for the explicit-grouping rewrite

use boolex_parser::{add_explicit_grouping, is_valid, parse};
use insta::assert_snapshot;
use proptest::prelude::*;

fn grouped(input: &str) -> String {
    add_explicit_grouping(input).unwrap_or_else(|e| panic!("Failed to group '{}': {}", input, e))
}

#[test]
fn test_grouping_snapshots() {
    assert_snapshot!(grouped("a & b | c"), @"((a & b) | c)");
    assert_snapshot!(grouped("a | b & c"), @"(a | (b & c))");
    assert_snapshot!(grouped("x > 3 & y < 2"), @"((x > 3) & (y < 2))");
    assert_snapshot!(grouped("!a & b"), @"((! a) & b)");
    assert_snapshot!(grouped("!(a | b)"), @"! (a | b)");
    assert_snapshot!(grouped("a & b & c | d"), @"((a & b & c) | d)");
    assert_snapshot!(grouped("x == 1"), @"x == 1");
    assert_snapshot!(grouped("((x))"), @"x");
    assert_snapshot!(grouped("f(a, b) >= 2 | ok"), @"((f(a, b) >= 2) | ok)");
}

#[test]
fn test_grouping_is_idempotent_on_examples() {
    for input in [
        "a & b | c",
        "!a & b | !(c | d) & e",
        "x > 3 & y < 2 | z != \"q\"",
        "a & (b & c)",
    ] {
        let once = grouped(input);
        assert_eq!(grouped(&once), once, "not idempotent for '{}'", input);
    }
}

#[test]
fn test_grouping_rejects_invalid_text() {
    assert!(add_explicit_grouping("a && b").is_err());
    assert!(add_explicit_grouping("(a & b").is_err());
}

fn atom() -> impl Strategy<Value = String> {
    let leaf = prop::sample::select(vec!["a", "b", "x", "y", "3", "0.5", "true", "\"s\"", "f(1, z)"])
        .prop_map(str::to_string);
    let comparison = (
        leaf.clone(),
        prop::sample::select(vec!["<", "<=", ">", ">=", "==", "!="]),
        leaf.clone(),
    )
        .prop_map(|(l, op, r)| format!("{} {} {}", l, op, r));
    prop_oneof![leaf, comparison]
}

fn expression() -> impl Strategy<Value = String> {
    atom().prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| format!("! ({})", e)),
            (inner.clone(), prop::sample::select(vec!["&", "|"]), inner.clone())
                .prop_map(|(l, op, r)| format!("{} {} {}", l, op, r)),
            inner.prop_map(|e| format!("({})", e)),
        ]
    })
}

proptest! {
    #[test]
    fn prop_generated_expressions_validate(input in expression()) {
        prop_assert!(is_valid(&input), "rejected '{}'", input);
    }

    #[test]
    fn prop_grouping_is_idempotent(input in expression()) {
        let once = add_explicit_grouping(&input).unwrap();
        let twice = add_explicit_grouping(&once).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn prop_grouping_preserves_tree(input in expression()) {
        let grouped = add_explicit_grouping(&input).unwrap();
        prop_assert_eq!(parse(&grouped).unwrap(), parse(&input).unwrap());
    }
}

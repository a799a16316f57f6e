//! Expansion of call leaves into function nodes

use crate::classify::TokenClassifier;
use boolex_diagnostics::Result;
use boolex_parser::{parse_fragment, split_call};
use boolex_tree::{ExprNode, TokenKind};
use indexmap::IndexSet;

/// Replace every call leaf `name(arg, ...)` with a node whose token is `name`
/// and whose children are the parsed arguments. Names are recorded in
/// discovery order, outer calls before the calls in their arguments.
pub(crate) fn expand_calls(node: &mut ExprNode, functions: &mut IndexSet<String>) -> Result<()> {
    if node.is_call_leaf() {
        let text = node.token().to_string();
        let (name, args) = split_call(&text)?;
        functions.insert(name.to_string());

        let mut children = Vec::with_capacity(args.len());
        for arg in args {
            let mut child = parse_fragment(arg)?;
            expand_calls(&mut child, functions)?;
            children.push(child);
        }

        log::trace!("expanded call '{}' with {} argument(s)", name, children.len());
        node.set_token(name);
        *node.children_mut() = children;
        return Ok(());
    }

    for child in node.children_mut() {
        expand_calls(child, functions)?;
    }
    Ok(())
}

/// Collect the leaves that classify as variables, in pre-order
pub(crate) fn collect_variables(tree: &ExprNode, classifier: &TokenClassifier) -> IndexSet<String> {
    let mut variables = IndexSet::new();
    tree.preorder(|node| {
        if node.is_leaf() && classifier.classify(node.token()) == TokenKind::Variable {
            variables.insert(node.token().to_string());
        }
    });
    variables
}

#[cfg(test)]
mod tests {
    use super::*;
    use boolex_parser::parse;
    use pretty_assertions::assert_eq;

    fn expand(text: &str) -> (ExprNode, IndexSet<String>) {
        let mut tree = parse(text).unwrap();
        let mut functions = IndexSet::new();
        expand_calls(&mut tree, &mut functions).unwrap();
        (tree, functions)
    }

    #[test]
    fn test_nested_calls() {
        let (tree, functions) = expand("STR_LENGTH(CONCAT(\"a\", \"b\")) <= STR_LENGTH(\"a\")");
        assert_eq!(functions.iter().collect::<Vec<_>>(), ["STR_LENGTH", "CONCAT"]);

        let left = &tree.children()[0];
        assert_eq!(left.token(), "STR_LENGTH");
        assert_eq!(left.children()[0].token(), "CONCAT");
        assert_eq!(left.children()[0].children().len(), 2);
        assert_eq!(tree.children()[1].children()[0].token(), "\"a\"");
    }

    #[test]
    fn test_arguments_are_full_expressions() {
        let (tree, _) = expand("IF(x > 1 & y, f(), \"n\") == 1");
        let call = &tree.children()[0];
        assert_eq!(call.children().len(), 3);
        assert_eq!(call.children()[0].token(), "&");
        assert_eq!(call.children()[1].token(), "f");
        assert!(call.children()[1].is_leaf());
    }

    #[test]
    fn test_variables_skip_functions() {
        let (tree, functions) = expand("x > 3 & LEN(name) < y | LEN == z");
        let classifier = TokenClassifier::new(functions);
        let variables = collect_variables(&tree, &classifier);
        assert_eq!(variables.iter().collect::<Vec<_>>(), ["x", "name", "y", "z"]);
    }

    #[test]
    fn test_malformed_argument_fails() {
        let mut tree = ExprNode::leaf("f(a &, b)");
        let err = expand_calls(&mut tree, &mut IndexSet::new()).unwrap_err();
        assert!(err.is_structural());
    }
}

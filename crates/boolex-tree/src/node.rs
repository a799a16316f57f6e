//! Expression tree nodes

use crate::{Connective, Operator};
use boolex_diagnostics::{BEX0103, BoolexError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A node of the expression tree.
///
/// Internal nodes carry an operator token (`!`, a comparison, `&`, `|`) or,
/// after call expansion, a function name. Leaves carry literal text, a
/// variable name, or an unexpanded call such as `CONCAT("a", "b")`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExprNode {
    token: String,
    children: Vec<ExprNode>,
}

impl ExprNode {
    /// Create a childless node
    pub fn leaf(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(token: impl Into<String>, children: Vec<ExprNode>) -> Self {
        Self {
            token: token.into(),
            children,
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn children(&self) -> &[ExprNode] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut Vec<ExprNode> {
        &mut self.children
    }

    pub fn child(&self, index: usize) -> Option<&ExprNode> {
        self.children.get(index)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub fn push_child(&mut self, child: ExprNode) {
        self.children.push(child);
    }

    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = token.into();
    }

    /// The operator this node's token names, if any
    pub fn operator(&self) -> Option<Operator> {
        Operator::from_token(&self.token)
    }

    /// A leaf holding call syntax that has not been expanded yet
    pub fn is_call_leaf(&self) -> bool {
        self.is_leaf() && !self.token.starts_with('"') && self.token.contains('(')
    }

    /// Total number of nodes in this subtree
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(ExprNode::len).sum::<usize>()
    }

    /// Always false: a tree holds at least its root
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Height of this subtree; a leaf has depth 1
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(ExprNode::depth).max().unwrap_or(0)
    }

    /// Visit every node, parent before children
    pub fn preorder<F: FnMut(&ExprNode)>(&self, mut visit: F) {
        self.walk_pre(&mut visit);
    }

    /// Visit every node, children before parent
    pub fn postorder<F: FnMut(&ExprNode)>(&self, mut visit: F) {
        self.walk_post(&mut visit);
    }

    fn walk_pre<F: FnMut(&ExprNode)>(&self, visit: &mut F) {
        visit(self);
        for child in &self.children {
            child.walk_pre(visit);
        }
    }

    fn walk_post<F: FnMut(&ExprNode)>(&self, visit: &mut F) {
        for child in &self.children {
            child.walk_post(visit);
        }
        visit(self);
    }

    /// Check the child count of every operator node in this subtree
    pub fn check_arity(&self) -> Result<()> {
        if let Some(op) = self.operator() {
            let arity = op.arity();
            if !arity.accepts(self.children.len()) {
                return Err(BoolexError::structural(
                    BEX0103,
                    format!(
                        "operator '{}' expects {} operand(s), found {}",
                        op,
                        arity,
                        self.children.len()
                    ),
                    self.to_string(),
                ));
            }
        }
        self.children.iter().try_for_each(ExprNode::check_arity)
    }

    /// Render an operand, adding parentheses unless the operand already
    /// delimits itself.
    fn fmt_operand(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operator() {
            _ if self.is_leaf() => f.write_str(&self.token),
            Some(Operator::Connective(_)) | None => write!(f, "{}", self),
            Some(_) => write!(f, "({})", self),
        }
    }
}

impl fmt::Display for ExprNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_leaf() {
            return f.write_str(&self.token);
        }
        match self.operator() {
            Some(Operator::Not) => {
                f.write_str("! ")?;
                self.children[0].fmt_operand(f)
            }
            Some(Operator::Comparison(cmp)) => {
                for (i, side) in self.children.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", cmp)?;
                    }
                    side.fmt_operand(f)?;
                }
                Ok(())
            }
            Some(Operator::Connective(conn)) => fmt_chain(f, conn, &self.children),
            None => {
                write!(f, "{}(", self.token)?;
                for (i, arg) in self.children.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}

fn fmt_chain(f: &mut fmt::Formatter<'_>, conn: Connective, children: &[ExprNode]) -> fmt::Result {
    f.write_str("(")?;
    for (i, child) in children.iter().enumerate() {
        if i > 0 {
            write!(f, " {} ", conn)?;
        }
        child.fmt_operand(f)?;
    }
    f.write_str(")")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cmp(op: &str, l: &str, r: &str) -> ExprNode {
        ExprNode::with_children(op, vec![ExprNode::leaf(l), ExprNode::leaf(r)])
    }

    fn sample() -> ExprNode {
        // (x > 3 & ! y) | z
        ExprNode::with_children(
            "|",
            vec![
                ExprNode::with_children(
                    "&",
                    vec![cmp(">", "x", "3"), ExprNode::with_children("!", vec![ExprNode::leaf("y")])],
                ),
                ExprNode::leaf("z"),
            ],
        )
    }

    #[test]
    fn test_preorder() {
        let mut seen = Vec::new();
        sample().preorder(|n| seen.push(n.token().to_string()));
        assert_eq!(seen, ["|", "&", ">", "x", "3", "!", "y", "z"]);
    }

    #[test]
    fn test_postorder_visits_children_first() {
        let mut seen = Vec::new();
        sample().postorder(|n| seen.push(n.token().to_string()));
        assert_eq!(seen, ["x", "3", ">", "y", "!", "&", "z", "|"]);
    }

    #[test]
    fn test_size_and_depth() {
        let tree = sample();
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.depth(), 4);
        assert_eq!(ExprNode::leaf("a").depth(), 1);
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(sample().to_string(), "(((x > 3) & (! y)) | z)");
        assert_eq!(cmp("==", "a", "b").to_string(), "a == b");
    }

    #[test]
    fn test_display_function_node() {
        let call = ExprNode::with_children(
            "CONCAT",
            vec![ExprNode::leaf("\"a\""), ExprNode::leaf("\"b\"")],
        );
        assert_eq!(call.to_string(), "CONCAT(\"a\", \"b\")");
        let compared = ExprNode::with_children("<=", vec![call, ExprNode::leaf("3")]);
        assert_eq!(compared.to_string(), "CONCAT(\"a\", \"b\") <= 3");
    }

    #[test]
    fn test_check_arity() {
        assert!(sample().check_arity().is_ok());

        let lonely_and = ExprNode::with_children("&", vec![ExprNode::leaf("a")]);
        let err = lonely_and.check_arity().unwrap_err();
        assert_eq!(err.code(), BEX0103);

        let bad_not = ExprNode::with_children(
            "|",
            vec![ExprNode::leaf("a"), ExprNode::leaf("!")],
        );
        assert!(bad_not.check_arity().is_err());
    }

    #[test]
    fn test_call_leaf() {
        assert!(ExprNode::leaf("f(1)").is_call_leaf());
        assert!(!ExprNode::leaf("x").is_call_leaf());
        let mut node = ExprNode::leaf("f(1)");
        node.set_token("f");
        node.push_child(ExprNode::leaf("1"));
        assert!(!node.is_call_leaf());
        assert_eq!(node.child(0).map(ExprNode::token), Some("1"));
    }
}

//! Recursive SQL writer

use boolex_diagnostics::{BEX0103, BoolexError, Result};
use boolex_tree::{Comparison, Connective, ExprNode, Operator};

/// Render a tree as a SQL boolean expression
pub fn to_sql(tree: &ExprNode) -> Result<String> {
    let mut out = String::new();
    SqlWriter::new().write(tree, &mut out)?;
    Ok(out)
}

/// Writes expression trees as SQL.
///
/// Leaves are emitted verbatim. `!` becomes `NOT`, `&`/`|` become `AND`/`OR`,
/// `==` becomes `=` and `!=` becomes `<>`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SqlWriter;

impl SqlWriter {
    pub fn new() -> Self {
        Self
    }

    /// Append the SQL for `node` to `out`
    pub fn write(&self, node: &ExprNode, out: &mut String) -> Result<()> {
        if node.is_leaf() && node.operator().is_none() {
            out.push_str(node.token());
            return Ok(());
        }

        let Some(op) = node.operator() else {
            return Err(BoolexError::unsupported(node.token()));
        };
        if !op.arity().accepts(node.children().len()) {
            return Err(BoolexError::structural(
                BEX0103,
                format!(
                    "operator '{}' expects {} operand(s), found {}",
                    op,
                    op.arity(),
                    node.children().len()
                ),
                node.to_string(),
            ));
        }

        match op {
            Operator::Not => self.write_not(&node.children()[0], out),
            Operator::Comparison(cmp) => self.write_comparison(cmp, node.children(), out),
            Operator::Connective(conn) => self.write_connective(conn, node.children(), out),
        }
    }

    fn write_not(&self, operand: &ExprNode, out: &mut String) -> Result<()> {
        out.push_str("(NOT ");
        self.write(operand, out)?;
        out.push(')');
        Ok(())
    }

    fn write_comparison(&self, cmp: Comparison, sides: &[ExprNode], out: &mut String) -> Result<()> {
        out.push('(');
        self.write(&sides[0], out)?;
        out.push(' ');
        out.push_str(cmp.sql_symbol());
        out.push(' ');
        self.write(&sides[1], out)?;
        out.push(')');
        Ok(())
    }

    fn write_connective(
        &self,
        conn: Connective,
        operands: &[ExprNode],
        out: &mut String,
    ) -> Result<()> {
        out.push('(');
        for (i, operand) in operands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
                out.push_str(conn.sql_keyword());
                out.push(' ');
            }
            self.write(operand, out)?;
        }
        out.push(')');
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use boolex_diagnostics::BEX0106;

    fn leaf(token: &str) -> ExprNode {
        ExprNode::leaf(token)
    }

    #[test]
    fn test_leaf_is_verbatim() {
        assert_eq!(to_sql(&leaf("CONCAT(\"a\", \"b\")")).unwrap(), "CONCAT(\"a\", \"b\")");
    }

    #[test]
    fn test_not_equal_maps_to_sql() {
        let node = ExprNode::with_children("!=", vec![leaf("a"), leaf("1")]);
        assert_eq!(to_sql(&node).unwrap(), "(a <> 1)");
    }

    #[test]
    fn test_empty_connective_is_structural() {
        let node = ExprNode::leaf("&");
        let err = to_sql(&node).unwrap_err();
        assert_eq!(err.code(), BEX0103);
    }

    #[test]
    fn test_function_node_is_unsupported() {
        let node = ExprNode::with_children("LEN", vec![leaf("x")]);
        let err = to_sql(&node).unwrap_err();
        assert_eq!(err.code(), BEX0106);
    }

    #[test]
    fn test_writer_appends() {
        let mut out = String::from("WHERE ");
        SqlWriter::new()
            .write(&ExprNode::with_children("!", vec![leaf("active")]), &mut out)
            .unwrap();
        assert_eq!(out, "WHERE (NOT active)");
    }
}

//! Function Collector
//!
//! Finds the analysis units of a file: every `FunctionDecl`, in pre-order.

use crate::domain::ast::{AstNode, AstNodeKind};

/// Collect all function declarations under `root` in source (pre-order) order.
///
/// Nested declarations are visited after their enclosing function. Closures are
/// `Closure` nodes and never count as declarations.
pub fn collect_functions(root: &AstNode) -> Vec<&AstNode> {
    let mut functions = Vec::new();
    visit(root, &mut functions);
    functions
}

fn visit<'a>(node: &'a AstNode, out: &mut Vec<&'a AstNode>) {
    if node.kind == AstNodeKind::FunctionDecl {
        out.push(node);
    }
    for child in &node.children {
        visit(child, out);
    }
}

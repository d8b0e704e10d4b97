//! Leaf Extractor
//!
//! Walks one function depth-first and records every identifier and literal
//! together with its ancestor path from the function root.

use crate::domain::ast::AstNode;

/// A terminal of a function plus the snapshot of its ancestors.
///
/// `path` runs root-to-leaf: it starts at the function declaration and ends
/// with the leaf itself, so it is never empty.
#[derive(Debug, Clone)]
pub struct LeafNode<'a> {
    path: Box<[&'a AstNode]>,
}

impl<'a> LeafNode<'a> {
    /// The leaf node itself.
    pub fn node(&self) -> &'a AstNode {
        self.path[self.path.len() - 1]
    }

    pub fn token(&self) -> &'a str {
        self.node().token().unwrap_or_default()
    }

    pub fn path(&self) -> &[&'a AstNode] {
        &self.path
    }
}

/// Extract the leaves of `function` in pre-order, left to right.
///
/// Every descendant is visited exactly once. The ancestor stack is owned by this
/// call, so concurrent extractions over the same tree do not interfere.
pub fn extract_leaves(function: &AstNode) -> Vec<LeafNode<'_>> {
    let mut leaves = Vec::new();
    let mut ancestors = Vec::new();
    walk(function, &mut ancestors, &mut leaves);
    leaves
}

fn walk<'a>(node: &'a AstNode, ancestors: &mut Vec<&'a AstNode>, leaves: &mut Vec<LeafNode<'a>>) {
    ancestors.push(node);
    if node.is_leaf() {
        leaves.push(LeafNode {
            path: ancestors.as_slice().into(),
        });
    }
    for child in &node.children {
        walk(child, ancestors, leaves);
    }
    ancestors.pop();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ast::AstNodeKind;

    /// fn add(a, b) { return a + b; }
    fn add_function() -> AstNode {
        AstNode::with_children(
            AstNodeKind::FunctionDecl,
            vec![
                AstNode::ident("add"),
                AstNode::with_children(
                    AstNodeKind::Params,
                    vec![
                        AstNode::with_children(AstNodeKind::Param, vec![AstNode::ident("a")]),
                        AstNode::with_children(AstNodeKind::Param, vec![AstNode::ident("b")]),
                    ],
                ),
                AstNode::with_children(
                    AstNodeKind::Block,
                    vec![AstNode::with_children(
                        AstNodeKind::Return,
                        vec![AstNode::with_children(
                            AstNodeKind::BinaryExpr("+"),
                            vec![AstNode::ident("a"), AstNode::ident("b")],
                        )],
                    )],
                ),
            ],
        )
    }

    #[test]
    fn test_leaves_in_traversal_order() {
        let func = add_function();
        let tokens: Vec<_> = extract_leaves(&func).iter().map(LeafNode::token).collect();
        assert_eq!(tokens, vec!["add", "a", "b", "a", "b"]);
    }

    #[test]
    fn test_ancestor_path_shape() {
        let func = add_function();
        let leaves = extract_leaves(&func);
        let tags: Vec<_> = leaves[3].path().iter().map(|n| n.tag()).collect();
        assert_eq!(
            tags,
            vec!["FunctionDecl", "Block", "Return", "BinaryExpr:+", "Ident"]
        );
        assert!(leaves[3].path()[0].is_same(&func));
        assert!(leaves[3].node().is_same(&func.children[2].children[0].children[0].children[0]));
    }

    #[test]
    fn test_every_path_starts_at_root_and_ends_at_leaf() {
        let func = add_function();
        for leaf in extract_leaves(&func) {
            assert!(!leaf.path().is_empty());
            assert!(leaf.path()[0].is_same(&func));
            assert!(leaf.node().is_leaf());
        }
    }

    #[test]
    fn test_function_without_leaves() {
        let func = AstNode::with_children(
            AstNodeKind::FunctionDecl,
            vec![AstNode::new(AstNodeKind::Block)],
        );
        assert!(extract_leaves(&func).is_empty());
    }
}

//! Equivalence against a naive reference implementation.
//!
//! The reference re-walks the whole function for every leaf of every pair to
//! rebuild its ancestor stack (leaf first), then compares stacks from the root
//! end. It is quadratic in function size per pair and exists only as an oracle.

mod common;

use common::{parse, SAMPLE};
use pathctx::domain::path::{DOWN, TAG_CLOSE, TAG_OPEN, UP};
use pathctx::{collect_functions, extract_path_contexts, AstNode, Triple};

fn leaves_of<'a>(node: &'a AstNode, out: &mut Vec<&'a AstNode>) {
    if node.is_leaf() {
        out.push(node);
    }
    for child in &node.children {
        leaves_of(child, out);
    }
}

/// Stack from `target` up to `root`, or `None` if `target` is not under `root`.
fn stack_to<'a>(root: &'a AstNode, target: &AstNode) -> Option<Vec<&'a AstNode>> {
    if root.is_same(target) {
        return Some(vec![root]);
    }
    root.children.iter().find_map(|child| {
        stack_to(child, target).map(|mut stack| {
            stack.push(root);
            stack
        })
    })
}

fn tag(node: &AstNode) -> String {
    format!("{TAG_OPEN}{}{TAG_CLOSE}", node.tag())
}

fn naive_path(function: &AstNode, source: &AstNode, target: &AstNode) -> String {
    let source_stack = stack_to(function, source).unwrap();
    let target_stack = stack_to(function, target).unwrap();

    let mut common = 0;
    while common < source_stack.len()
        && common < target_stack.len()
        && source_stack[source_stack.len() - 1 - common]
            .is_same(target_stack[target_stack.len() - 1 - common])
    {
        common += 1;
    }

    let mut path = String::new();
    for node in &source_stack[..source_stack.len() - common] {
        path.push_str(&tag(node));
        path.push_str(UP);
    }
    path.push_str(&tag(source_stack[source_stack.len() - common]));
    for node in target_stack[..target_stack.len() - common].iter().rev() {
        path.push_str(DOWN);
        path.push_str(&tag(node));
    }
    path
}

fn naive_extract(tree: &AstNode) -> Vec<Triple> {
    let mut triples = Vec::new();
    for function in collect_functions(tree) {
        let mut leaves = Vec::new();
        leaves_of(function, &mut leaves);
        for i in 0..leaves.len() {
            for j in i + 1..leaves.len() {
                triples.push(Triple {
                    left: leaves[i].token().unwrap().to_string(),
                    path: naive_path(function, leaves[i], leaves[j]),
                    right: leaves[j].token().unwrap().to_string(),
                });
            }
        }
    }
    triples
}

#[test]
fn canonical_matches_naive_on_sample() {
    let tree = parse(SAMPLE);
    let canonical = extract_path_contexts(&tree);
    let naive = naive_extract(&tree);
    assert!(!canonical.is_empty());
    assert_eq!(canonical, naive);
}

#[test]
fn canonical_matches_naive_on_deep_nesting() {
    let tree = parse(
        "fn deep(a: u8) -> u8 { if a > 1 { if a > 2 { if a > 3 { return a; } } } loop { break a; } }",
    );
    assert_eq!(extract_path_contexts(&tree), naive_extract(&tree));
}

#[test]
fn canonical_matches_naive_on_repeated_structure() {
    let tree = parse("fn rep() { f(x, x); f(x, x); g([1, 1], [1, 1]); }");
    assert_eq!(extract_path_contexts(&tree), naive_extract(&tree));
}

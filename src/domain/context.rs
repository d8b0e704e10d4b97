//! Path-context generation.
//!
//! Pairs every two leaves of a function and emits one `(token, path, token)` triple
//! per pair. Functions are independent of each other, so they may be processed in
//! parallel as long as the output keeps function order.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::ast::AstNode;
use crate::domain::functions::collect_functions;
use crate::domain::leaves::{extract_leaves, LeafNode};
use crate::domain::path::encode_path;

/// One path-context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triple {
    pub left: String,
    pub path: String,
    pub right: String,
}

/// Renders the record as `left,path,right` without any escaping.
impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.left, self.path, self.right)
    }
}

/// The triples of a single function declaration.
#[derive(Debug, Clone)]
pub struct FunctionContexts {
    pub name: String,
    pub leaf_count: usize,
    pub triples: Vec<Triple>,
}

/// Emit a triple for every pair `i < j` of `leaves`, `i` ascending then `j` ascending.
///
/// L leaves give L·(L-1)/2 triples; fewer than two leaves give none.
pub fn generate_triples(leaves: &[LeafNode<'_>]) -> Vec<Triple> {
    let mut triples = Vec::with_capacity(leaves.len() * leaves.len().saturating_sub(1) / 2);
    for (i, source) in leaves.iter().enumerate() {
        for target in &leaves[i + 1..] {
            if let Some(path) = encode_path(source.path(), target.path()) {
                triples.push(Triple {
                    left: source.token().to_string(),
                    path,
                    right: target.token().to_string(),
                });
            }
        }
    }
    triples
}

fn analyse_function(function: &AstNode) -> FunctionContexts {
    let leaves = extract_leaves(function);
    FunctionContexts {
        name: function.function_name().unwrap_or_default().to_string(),
        leaf_count: leaves.len(),
        triples: generate_triples(&leaves),
    }
}

/// Per-function path-contexts, in declaration order.
pub fn function_contexts(tree: &AstNode) -> Vec<FunctionContexts> {
    collect_functions(tree).into_iter().map(analyse_function).collect()
}

/// All triples of `tree`: function-declaration order, then pair order.
pub fn extract_path_contexts(tree: &AstNode) -> Vec<Triple> {
    function_contexts(tree)
        .into_iter()
        .flat_map(|f| f.triples)
        .collect()
}

/// Same output as [`extract_path_contexts`], with functions spread over the rayon pool.
pub fn extract_path_contexts_parallel(tree: &AstNode) -> Vec<Triple> {
    let per_function: Vec<FunctionContexts> = collect_functions(tree)
        .par_iter()
        .map(|function| analyse_function(function))
        .collect();
    per_function.into_iter().flat_map(|f| f.triples).collect()
}

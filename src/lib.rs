// Main library entry point for pathctx.
//
// Parses Rust source, finds every function declaration and emits, for each pair
// of leaves (identifiers and literals) in a function, the path between them
// through the syntax tree: `token,path,token`.

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ports;

pub use domain::ast::{AstNode, AstNodeKind};
pub use domain::context::{
    extract_path_contexts, extract_path_contexts_parallel, function_contexts, generate_triples,
    FunctionContexts, Triple,
};
pub use domain::functions::collect_functions;
pub use domain::leaves::{extract_leaves, LeafNode};
pub use domain::path::{encode_path, PathParts};
pub use error::ExtractError;

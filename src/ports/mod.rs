use crate::domain::ast::AstNode;
use crate::error::Result;

pub mod context_exporter;

/// Turns source text into the lowered syntax tree the extractor consumes.
pub trait AstParser: Send + Sync {
    /// `path` is only used to label errors.
    fn parse(&self, path: &str, src: &str) -> Result<AstNode>;
}

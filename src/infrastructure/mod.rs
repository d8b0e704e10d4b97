// Infrastructure implementations for pathctx.

pub mod concurrency;
pub mod lowering;
pub mod project_loader;

use crate::domain::ast::AstNode;
use crate::error::{ExtractError, Result};
use crate::ports::AstParser;

/// Parses Rust source with `syn` and lowers it to `AstNode`.
pub struct SynAstParser;

impl AstParser for SynAstParser {
    fn parse(&self, path: &str, src: &str) -> Result<AstNode> {
        let file = syn::parse_file(src).map_err(|e| {
            let start = e.span().start();
            ExtractError::Parse {
                path: path.to_string(),
                line: start.line,
                column: start.column + 1,
                message: e.to_string(),
            }
        })?;
        Ok(lowering::lower_file(&file))
    }
}

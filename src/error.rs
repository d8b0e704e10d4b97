//! Error types for pathctx.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExtractError>;

#[derive(Debug, Error)]
pub enum ExtractError {
    /// Source text is not valid Rust. Fatal for the file; extraction never starts.
    #[error("failed to parse {path}:{line}:{column}: {message}")]
    Parse {
        path: String,
        line: usize,
        column: usize,
        message: String,
    },

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("workspace loading failed: {0}")]
    Workspace(String),

    #[error("no source files given; use --input, --folder or --workspace")]
    NoSources,
}

// Core extraction: tree types, function collection, leaf extraction, path encoding
// and pair generation.

pub mod ast;
pub mod context;
pub mod functions;
pub mod leaves;
pub mod path;

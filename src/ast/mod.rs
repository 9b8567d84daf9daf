// Re-export all AST types from ast_types.rs, then layer the JSON loader and
// the query facade on top of them
pub use super::ast_types::*;

mod json;
pub mod query;

pub use json::{from_json, read_json_file, to_json};

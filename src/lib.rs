//! Parenthesization decisions for printing JavaScript and Flow ASTs.
//!
//! [`needs_parens`] answers, for a node and its parent, whether the printed
//! node must be wrapped in parentheses. [`CodeGenerator`] is a small printer
//! built on top of it, and [`from_json`] reads Babel's JSON AST output.

pub mod debug;

pub mod ast;
mod ast_types;
pub mod codegen;
pub mod config;
pub mod error;
pub mod parens;
pub mod precedence;

pub use ast::*;
pub use codegen::*;
pub use config::*;
pub use error::{ErrorKind, ParensError};
pub use parens::{needs_parens, ParenRule, ParenRules};

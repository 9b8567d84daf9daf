//! Reading and writing Babel-shaped JSON.
//!
//! Babel attaches positions and other metadata (`start`, `end`, `loc`,
//! `extra`) to every node; those fields are ignored on input.

use super::Node;
use crate::debug_println;
use crate::error::{ParensError, Result};
use std::fs;
use std::path::Path;

/// Parse a single node (usually a `Program` or an expression) from JSON
pub fn from_json(source: &str) -> Result<Node> {
    let node: Node = serde_json::from_str(source)?;
    debug_println!("json", "loaded {} from {} bytes", node.kind(), source.len());
    Ok(node)
}

/// Read and parse a JSON AST file; error spans carry the file name
pub fn read_json_file(path: impl AsRef<Path>) -> Result<Node> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|err| {
        ParensError::from(err).with_note(format!("while reading {}", path.display()))
    })?;

    from_json(&source).map_err(|mut err| {
        if let Some(span) = err.context.span.as_mut() {
            let file = path.display().to_string();
            span.start.file = Some(file.clone());
            span.end.file = Some(file);
        }
        err
    })
}

/// Serialize a node back to Babel-shaped JSON
pub fn to_json(node: &Node) -> Result<String> {
    Ok(serde_json::to_string(node)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use crate::error::ErrorKind;

    #[test]
    fn test_ignores_babel_metadata() {
        let node = from_json(
            r#"{"type": "Identifier", "name": "x", "start": 0, "end": 1,
                "loc": {"start": {"line": 1, "column": 0}, "end": {"line": 1, "column": 1}}}"#,
        )
        .unwrap();
        assert_eq!(node.kind(), NodeKind::Identifier);
    }

    #[test]
    fn test_unit_nodes_serialize_with_tag() {
        assert_eq!(to_json(&Node::ThisExpression).unwrap(), r#"{"type":"ThisExpression"}"#);
    }

    #[test]
    fn test_unknown_node_type() {
        let err = from_json(r#"{"type": "JSXElement"}"#).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidAst);
        assert!(err.message.contains("JSXElement"));
    }

    #[test]
    fn test_missing_file() {
        let err = read_json_file("/nonexistent/ast.json").unwrap_err();
        assert_eq!(err.kind, ErrorKind::IoError);
        assert_eq!(
            err.context.note.as_deref(),
            Some("while reading /nonexistent/ast.json")
        );
    }
}

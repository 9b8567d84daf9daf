//! Rules for Flow type annotations.

use crate::ast::Node;

/// Nullable and function types must be grouped as an array's element type
///
/// `(?number)[]` is an array of nullable numbers while `?number[]` is a
/// nullable array; likewise `(() => void)[]`.
pub fn type_in_array(_node: &Node, parent: &Node) -> bool {
    matches!(parent, Node::ArrayTypeAnnotation(_))
}

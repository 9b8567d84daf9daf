//! Rules for binary and logical expressions.

use crate::ast::{BinaryOperator, Node};

/// Generic rule shared by `BinaryExpression` and `LogicalExpression`
///
/// # Panics
///
/// If `node` is not binary-like.
pub fn binary(node: &Node, parent: &Node) -> bool {
    let Some(expr) = node.as_binary_like() else {
        panic!("`binary` rule applied to a {} node", node.kind());
    };

    // (a + b)()  new (a + b)
    if node.is_callee_of(parent) {
        return true;
    }

    // !(a && b)
    if parent.is_unary_like() {
        return true;
    }

    // (a + b).c
    if node.is_object_of(parent) {
        return true;
    }

    if let Some(outer) = parent.as_binary_like() {
        // (a + b) * c
        if outer.precedence > expr.precedence {
            return true;
        }

        // a - (b - c); chained logicals of one kind print flat
        if outer.precedence == expr.precedence && node.is_right_of(parent) && !outer.logical {
            return true;
        }
    }

    false
}

/// `binary`, plus `in` where it would read as a for-in head
///
/// # Panics
///
/// If `node` is not a `BinaryExpression`.
pub fn binary_expression(node: &Node, parent: &Node) -> bool {
    let Node::BinaryExpression(expr) = node else {
        panic!("`binary_expression` rule applied to a {} node", node.kind());
    };

    if binary(node, parent) {
        return true;
    }

    // let i = (1 in []);
    // for ((1 in []);;);
    expr.operator == BinaryOperator::In
        && (matches!(parent, Node::VariableDeclarator(_)) || parent.is_for())
}

//! Rules for the remaining expression kinds.
//!
//! Each rule checks its own exceptions first and, where noted, falls back to
//! [`unary_like`] or [`conditional_expression`] last.

use crate::ast::Node;

/// Shared fallback: the node is the target of a member access or a call
pub fn unary_like(node: &Node, parent: &Node) -> bool {
    // (-x).y  (typeof x)()
    node.is_object_of(parent) || node.is_callee_of(parent)
}

pub fn update_expression(node: &Node, parent: &Node) -> bool {
    // (x++).toString()
    if node.is_object_of(parent) {
        return true;
    }
    unary_like(node, parent)
}

pub fn object_expression(node: &Node, parent: &Node) -> bool {
    // ({ foo: "bar" });
    if matches!(parent, Node::ExpressionStatement(_)) {
        return true;
    }

    // ({ foo: "bar" }).foo
    if node.is_object_of(parent) {
        return true;
    }

    // ({}) === foo
    // Only matters at the start of a statement, which one level of parent
    // cannot see; always wrap.
    node.is_left_of(parent)
}

/// Comma expressions print bare only where a comma cannot be misread
pub fn sequence_expression(node: &Node, parent: &Node) -> bool {
    match parent {
        // for (i = 0, j = 1; ...; i++, j--)
        Node::ForStatement(_) => false,
        Node::ExpressionStatement(_) if node.is_expression_of(parent) => false,
        Node::ReturnStatement(_) | Node::ThrowStatement(_) => false,
        // Unlisted contexts get parentheses even where they are redundant
        _ => true,
    }
}

pub fn yield_expression(_node: &Node, parent: &Node) -> bool {
    parent.is_binary()
        || parent.is_unary_like()
        || matches!(
            parent,
            Node::CallExpression(_)
                | Node::MemberExpression(_)
                | Node::NewExpression(_)
                | Node::ConditionalExpression(_)
                | Node::YieldExpression(_)
        )
}

pub fn class_expression(_node: &Node, parent: &Node) -> bool {
    // (class {});
    // export default (class {});
    matches!(parent, Node::ExpressionStatement(_)) || parent.is_export_declaration()
}

pub fn function_expression(node: &Node, parent: &Node) -> bool {
    // (function () {});
    // export default (function () {});
    if matches!(parent, Node::ExpressionStatement(_)) || parent.is_export_declaration() {
        return true;
    }
    unary_like(node, parent)
}

pub fn arrow_function_expression(node: &Node, parent: &Node) -> bool {
    if parent.is_export_declaration() {
        return true;
    }

    // (() => a) || b
    if parent.is_binary() {
        return true;
    }

    unary_like(node, parent)
}

pub fn conditional_expression(node: &Node, parent: &Node) -> bool {
    // !(a ? b : c)
    if parent.is_unary_like() {
        return true;
    }

    // (a ? b : c) + d
    if parent.is_binary() {
        return true;
    }

    // (a ? b : c) ? d : e
    if node.is_test_of(parent) {
        return true;
    }

    unary_like(node, parent)
}

/// # Panics
///
/// If `node` is not an `AssignmentExpression`.
pub fn assignment_expression(node: &Node, parent: &Node) -> bool {
    let Node::AssignmentExpression(assign) = node else {
        panic!("`assignment_expression` rule applied to a {} node", node.kind());
    };

    // ({ a } = b); a leading `{` would open a block
    if matches!(*assign.left, Node::ObjectPattern(_)) {
        return true;
    }

    conditional_expression(node, parent)
}

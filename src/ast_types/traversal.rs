//! AST traversal with parent tracking.
//!
//! The parenthesization rules need each node together with the node that
//! syntactically contains it, so the walker hands both to the visitor.

use super::*;
use std::convert::Infallible;

pub trait NodeExt {
    /// Direct children in source order
    fn children(&self) -> Vec<&Node>;

    /// Walk the tree in pre-order, passing each node and its parent
    ///
    /// The root is visited with `None`. Return Err to stop early.
    fn walk<'a, F, E>(&'a self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&'a Node, Option<&'a Node>) -> Result<(), E>;

    /// Find all nodes (including the root) matching a predicate
    fn find_nodes<F>(&self, predicate: F) -> Vec<&Node>
    where
        F: Fn(&Node) -> bool;
}

impl NodeExt for Node {
    fn children(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = Vec::new();
        match self {
            Node::Program(program) => out.extend(program.body.iter()),
            Node::ExpressionStatement(stmt) => out.push(&stmt.expression),
            Node::BlockStatement(block) => out.extend(block.body.iter()),
            Node::ReturnStatement(ret) => out.extend(ret.argument.as_deref()),
            Node::ThrowStatement(throw) => out.push(&throw.argument),
            Node::VariableDeclaration(decl) => out.extend(decl.declarations.iter()),
            Node::VariableDeclarator(decl) => {
                out.push(&decl.id);
                out.extend(decl.init.as_deref());
            }
            Node::ForStatement(stmt) => {
                out.extend(stmt.init.as_deref());
                out.extend(stmt.test.as_deref());
                out.extend(stmt.update.as_deref());
                out.push(&stmt.body);
            }
            Node::ForInStatement(stmt) => {
                out.extend([&*stmt.left, &*stmt.right, &*stmt.body]);
            }
            Node::ForOfStatement(stmt) => {
                out.extend([&*stmt.left, &*stmt.right, &*stmt.body]);
            }
            Node::ExportDefaultDeclaration(export) => out.push(&export.declaration),
            Node::ExportNamedDeclaration(export) => out.extend(export.declaration.as_deref()),
            Node::ArrayExpression(array) => out.extend(array.elements.iter().flatten()),
            Node::ObjectExpression(object) => out.extend(object.properties.iter()),
            Node::ObjectProperty(prop) => {
                // Shorthand properties share one name; only the value is printed
                if !prop.shorthand {
                    out.push(&prop.key);
                }
                out.push(&prop.value);
            }
            Node::SpreadElement(spread) => out.push(&spread.argument),
            Node::FunctionExpression(func) => {
                out.extend(func.id.as_deref());
                out.extend(func.params.iter());
                out.push(&func.body);
            }
            Node::ArrowFunctionExpression(arrow) => {
                out.extend(arrow.params.iter());
                out.push(&arrow.body);
            }
            Node::ClassExpression(class) => {
                out.extend(class.id.as_deref());
                out.extend(class.super_class.as_deref());
                out.push(&class.body);
            }
            Node::ClassBody(body) => out.extend(body.body.iter()),
            Node::UnaryExpression(unary) => out.push(&unary.argument),
            Node::UpdateExpression(update) => out.push(&update.argument),
            Node::BinaryExpression(binary) => out.extend([&*binary.left, &*binary.right]),
            Node::LogicalExpression(logical) => out.extend([&*logical.left, &*logical.right]),
            Node::AssignmentExpression(assign) => out.extend([&*assign.left, &*assign.right]),
            Node::ConditionalExpression(cond) => {
                out.extend([&*cond.test, &*cond.consequent, &*cond.alternate]);
            }
            Node::SequenceExpression(seq) => out.extend(seq.expressions.iter()),
            Node::YieldExpression(expr) => out.extend(expr.argument.as_deref()),
            Node::CallExpression(call) => {
                out.push(&call.callee);
                out.extend(call.arguments.iter());
            }
            Node::NewExpression(new) => {
                out.push(&new.callee);
                out.extend(new.arguments.iter());
            }
            Node::MemberExpression(member) => out.extend([&*member.object, &*member.property]),
            Node::ObjectPattern(pattern) => out.extend(pattern.properties.iter()),
            Node::ArrayPattern(pattern) => out.extend(pattern.elements.iter().flatten()),
            Node::ArrayTypeAnnotation(array) => out.push(&array.element_type),
            Node::NullableTypeAnnotation(nullable) => out.push(&nullable.type_annotation),
            Node::FunctionTypeAnnotation(func) => {
                out.extend(func.params.iter());
                out.extend(func.rest.as_deref());
                out.push(&func.return_type);
            }
            Node::FunctionTypeParam(param) => {
                out.extend(param.name.as_deref());
                out.push(&param.type_annotation);
            }
            Node::GenericTypeAnnotation(generic) => out.push(&generic.id),
            Node::Identifier(_)
            | Node::NumericLiteral(_)
            | Node::StringLiteral(_)
            | Node::BooleanLiteral(_)
            | Node::NullLiteral
            | Node::ThisExpression
            | Node::NumberTypeAnnotation
            | Node::StringTypeAnnotation
            | Node::VoidTypeAnnotation => {}
        }
        out
    }

    fn walk<'a, F, E>(&'a self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&'a Node, Option<&'a Node>) -> Result<(), E>,
    {
        walk_from(self, None, visitor)
    }

    fn find_nodes<F>(&self, predicate: F) -> Vec<&Node>
    where
        F: Fn(&Node) -> bool,
    {
        let mut found = Vec::new();
        let walked = self.walk(&mut |node, _parent| {
            if predicate(node) {
                found.push(node);
            }
            Ok::<(), Infallible>(())
        });
        match walked {
            Ok(()) => found,
            Err(never) => match never {},
        }
    }
}

fn walk_from<'a, F, E>(node: &'a Node, parent: Option<&'a Node>, visitor: &mut F) -> Result<(), E>
where
    F: FnMut(&'a Node, Option<&'a Node>) -> Result<(), E>,
{
    visitor(node, parent)?;
    for child in node.children() {
        walk_from(child, Some(node), visitor)?;
    }
    Ok(())
}

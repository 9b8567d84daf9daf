//! Abstract Syntax Tree (AST) type definitions
//!
//! The tree mirrors Babel's JavaScript/Flow AST closely enough to read its
//! JSON output directly: every node is tagged by its `type` field. The
//! predicates and relationship queries at the bottom of this module are what
//! the parenthesization rules consult.

mod expr;
mod flow;
mod operators;
mod stmt;
mod traversal;

pub use expr::*;
pub use flow::*;
pub use operators::*;
pub use stmt::*;
pub use traversal::NodeExt;

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! node_types {
    ($($(#[$doc:meta])* $variant:ident $(($payload:ty))?,)+) => {
        /// A single AST node, tagged by Babel's `type` field
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        #[serde(tag = "type")]
        pub enum Node {
            $($(#[$doc])* $variant $(($payload))?,)+
        }

        /// The tag of a [`Node`] without its fields
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $($variant,)+
        }

        impl Node {
            pub fn kind(&self) -> NodeKind {
                match self {
                    $(Node::$variant { .. } => NodeKind::$variant,)+
                }
            }
        }

        impl NodeKind {
            /// Babel's name for this node type
            pub fn as_str(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

node_types! {
    Program(Program),

    // Statements and declarations
    ExpressionStatement(ExpressionStatement),
    BlockStatement(BlockStatement),
    ReturnStatement(ReturnStatement),
    ThrowStatement(ThrowStatement),
    VariableDeclaration(VariableDeclaration),
    VariableDeclarator(VariableDeclarator),
    ForStatement(ForStatement),
    ForInStatement(ForInStatement),
    ForOfStatement(ForOfStatement),
    ExportDefaultDeclaration(ExportDefaultDeclaration),
    ExportNamedDeclaration(ExportNamedDeclaration),

    // Expressions
    Identifier(Identifier),
    NumericLiteral(NumericLiteral),
    StringLiteral(StringLiteral),
    BooleanLiteral(BooleanLiteral),
    NullLiteral,
    ThisExpression,
    ArrayExpression(ArrayExpression),
    ObjectExpression(ObjectExpression),
    ObjectProperty(ObjectProperty),
    SpreadElement(SpreadElement),
    FunctionExpression(FunctionExpression),
    ArrowFunctionExpression(ArrowFunctionExpression),
    ClassExpression(ClassExpression),
    ClassBody(ClassBody),
    UnaryExpression(UnaryExpression),
    UpdateExpression(UpdateExpression),
    BinaryExpression(BinaryExpression),
    LogicalExpression(LogicalExpression),
    AssignmentExpression(AssignmentExpression),
    ConditionalExpression(ConditionalExpression),
    SequenceExpression(SequenceExpression),
    YieldExpression(YieldExpression),
    CallExpression(CallExpression),
    NewExpression(NewExpression),
    MemberExpression(MemberExpression),

    // Patterns
    ObjectPattern(ObjectPattern),
    ArrayPattern(ArrayPattern),

    // Flow types
    ArrayTypeAnnotation(ArrayTypeAnnotation),
    NullableTypeAnnotation(NullableTypeAnnotation),
    FunctionTypeAnnotation(FunctionTypeAnnotation),
    FunctionTypeParam(FunctionTypeParam),
    NumberTypeAnnotation,
    StringTypeAnnotation,
    VoidTypeAnnotation,
    GenericTypeAnnotation(GenericTypeAnnotation),
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform view over `BinaryExpression` and `LogicalExpression`
#[derive(Debug, Clone, Copy)]
pub struct BinaryLike<'a> {
    pub operator: &'static str,
    pub precedence: u8,
    pub logical: bool,
    pub left: &'a Node,
    pub right: &'a Node,
}

impl Node {
    /// `BinaryExpression` or `LogicalExpression`
    pub fn is_binary(&self) -> bool {
        matches!(self, Node::BinaryExpression(_) | Node::LogicalExpression(_))
    }

    /// Prefix and postfix operators: `typeof`, `void`, `delete`, `-x`, `x++`...
    pub fn is_unary_like(&self) -> bool {
        matches!(self, Node::UnaryExpression(_) | Node::UpdateExpression(_))
    }

    /// Any for-loop header: `for (;;)`, `for (in)` and `for (of)`
    pub fn is_for(&self) -> bool {
        matches!(
            self,
            Node::ForStatement(_) | Node::ForInStatement(_) | Node::ForOfStatement(_)
        )
    }

    pub fn is_export_declaration(&self) -> bool {
        matches!(
            self,
            Node::ExportDefaultDeclaration(_) | Node::ExportNamedDeclaration(_)
        )
    }

    pub fn as_binary_like(&self) -> Option<BinaryLike<'_>> {
        match self {
            Node::BinaryExpression(expr) => Some(BinaryLike {
                operator: expr.operator.as_str(),
                precedence: expr.operator.precedence(),
                logical: false,
                left: &expr.left,
                right: &expr.right,
            }),
            Node::LogicalExpression(expr) => Some(BinaryLike {
                operator: expr.operator.as_str(),
                precedence: expr.operator.precedence(),
                logical: true,
                left: &expr.left,
                right: &expr.right,
            }),
            _ => None,
        }
    }

    // Relationship queries compare by address: `self` must be borrowed out of
    // `parent` itself, not a structurally equal copy.

    /// `self` is the object of a member access `parent`
    pub fn is_object_of(&self, parent: &Node) -> bool {
        match parent {
            Node::MemberExpression(member) => is_same(&member.object, self),
            _ => false,
        }
    }

    /// `self` is the callee of a call or `new` expression `parent`
    pub fn is_callee_of(&self, parent: &Node) -> bool {
        match parent {
            Node::CallExpression(call) => is_same(&call.callee, self),
            Node::NewExpression(new) => is_same(&new.callee, self),
            _ => false,
        }
    }

    /// `self` is the left operand of a binary-like `parent`
    pub fn is_left_of(&self, parent: &Node) -> bool {
        parent
            .as_binary_like()
            .is_some_and(|outer| is_same(outer.left, self))
    }

    /// `self` is the right operand of a binary-like `parent`
    pub fn is_right_of(&self, parent: &Node) -> bool {
        parent
            .as_binary_like()
            .is_some_and(|outer| is_same(outer.right, self))
    }

    /// `self` is the test of a conditional `parent`
    pub fn is_test_of(&self, parent: &Node) -> bool {
        match parent {
            Node::ConditionalExpression(cond) => is_same(&cond.test, self),
            _ => false,
        }
    }

    /// `self` is the whole expression of an expression statement `parent`
    pub fn is_expression_of(&self, parent: &Node) -> bool {
        match parent {
            Node::ExpressionStatement(stmt) => is_same(&stmt.expression, self),
            _ => false,
        }
    }
}

fn is_same(child: &Node, node: &Node) -> bool {
    std::ptr::eq(child, node)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(name: &str) -> Box<Node> {
        Box::new(Node::Identifier(Identifier {
            name: name.to_string(),
        }))
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(NodeKind::BinaryExpression.to_string(), "BinaryExpression");
        assert_eq!(Node::NullLiteral.kind(), NodeKind::NullLiteral);
        assert_eq!(
            Node::ThisExpression.kind().as_str(),
            "ThisExpression"
        );
    }

    #[test]
    fn test_relationships_use_identity() {
        let member = Node::MemberExpression(MemberExpression {
            object: ident("a"),
            property: ident("b"),
            computed: false,
        });
        let Node::MemberExpression(inner) = &member else {
            unreachable!()
        };

        assert!(inner.object.is_object_of(&member));
        assert!(!inner.property.is_object_of(&member));

        // An equal copy is not the parent's child
        let copy = inner.object.clone();
        assert_eq!(copy, inner.object);
        assert!(!copy.is_object_of(&member));
    }

    #[test]
    fn test_binary_like_view() {
        let logical = Node::LogicalExpression(LogicalExpression {
            operator: LogicalOperator::And,
            left: ident("a"),
            right: ident("b"),
        });
        let view = logical.as_binary_like().unwrap();
        assert!(view.logical);
        assert_eq!(view.operator, "&&");
        assert_eq!(view.precedence, 1);

        assert!(Node::NullLiteral.as_binary_like().is_none());
    }
}

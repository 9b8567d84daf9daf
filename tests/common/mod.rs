#![allow(dead_code)]

use jsparens::ast::*;

/// Build a node from an operator token, picking the logical or binary shape
pub fn infix(left: Node, token: &str, right: Node) -> Node {
    match token.parse::<LogicalOperator>() {
        Ok(operator) => logical(left, operator, right),
        Err(_) => binary(left, token, right),
    }
}

pub fn id(name: &str) -> Node {
    Node::Identifier(Identifier {
        name: name.to_string(),
    })
}

pub fn num(value: f64) -> Node {
    Node::NumericLiteral(NumericLiteral { value })
}

pub fn string(value: &str) -> Node {
    Node::StringLiteral(StringLiteral {
        value: value.to_string(),
    })
}

pub fn binary(left: Node, token: &str, right: Node) -> Node {
    Node::BinaryExpression(BinaryExpression {
        operator: token.parse().expect("binary operator"),
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn logical(left: Node, operator: LogicalOperator, right: Node) -> Node {
    Node::LogicalExpression(LogicalExpression {
        operator,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn assign(left: Node, right: Node) -> Node {
    Node::AssignmentExpression(AssignmentExpression {
        operator: AssignmentOperator::Assign,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn unary(token: &str, argument: Node) -> Node {
    Node::UnaryExpression(UnaryExpression {
        operator: token.parse().expect("unary operator"),
        argument: Box::new(argument),
    })
}

pub fn update(token: &str, prefix: bool, argument: Node) -> Node {
    Node::UpdateExpression(UpdateExpression {
        operator: token.parse().expect("update operator"),
        prefix,
        argument: Box::new(argument),
    })
}

pub fn member(object: Node, property: &str) -> Node {
    Node::MemberExpression(MemberExpression {
        object: Box::new(object),
        property: Box::new(id(property)),
        computed: false,
    })
}

pub fn call(callee: Node, arguments: Vec<Node>) -> Node {
    Node::CallExpression(CallExpression {
        callee: Box::new(callee),
        arguments,
    })
}

pub fn new_expr(callee: Node, arguments: Vec<Node>) -> Node {
    Node::NewExpression(NewExpression {
        callee: Box::new(callee),
        arguments,
    })
}

pub fn cond(test: Node, consequent: Node, alternate: Node) -> Node {
    Node::ConditionalExpression(ConditionalExpression {
        test: Box::new(test),
        consequent: Box::new(consequent),
        alternate: Box::new(alternate),
    })
}

pub fn seq(expressions: Vec<Node>) -> Node {
    Node::SequenceExpression(SequenceExpression { expressions })
}

pub fn yield_expr(argument: Option<Node>) -> Node {
    Node::YieldExpression(YieldExpression {
        argument: argument.map(Box::new),
        delegate: false,
    })
}

pub fn object(properties: Vec<Node>) -> Node {
    Node::ObjectExpression(ObjectExpression { properties })
}

pub fn property(key: &str, value: Node) -> Node {
    Node::ObjectProperty(ObjectProperty {
        key: Box::new(id(key)),
        value: Box::new(value),
        computed: false,
        shorthand: false,
    })
}

pub fn shorthand(name: &str) -> Node {
    Node::ObjectProperty(ObjectProperty {
        key: Box::new(id(name)),
        value: Box::new(id(name)),
        computed: false,
        shorthand: true,
    })
}

pub fn object_pattern(properties: Vec<Node>) -> Node {
    Node::ObjectPattern(ObjectPattern { properties })
}

pub fn function() -> Node {
    Node::FunctionExpression(FunctionExpression {
        id: None,
        params: vec![],
        body: Box::new(block(vec![])),
        generator: false,
    })
}

pub fn arrow(params: Vec<Node>, body: Node) -> Node {
    Node::ArrowFunctionExpression(ArrowFunctionExpression {
        params,
        body: Box::new(body),
    })
}

pub fn class() -> Node {
    Node::ClassExpression(ClassExpression {
        id: None,
        super_class: None,
        body: Box::new(Node::ClassBody(ClassBody { body: vec![] })),
    })
}

pub fn block(body: Vec<Node>) -> Node {
    Node::BlockStatement(BlockStatement { body })
}

pub fn expr_stmt(expression: Node) -> Node {
    Node::ExpressionStatement(ExpressionStatement {
        expression: Box::new(expression),
    })
}

pub fn return_stmt(argument: Option<Node>) -> Node {
    Node::ReturnStatement(ReturnStatement {
        argument: argument.map(Box::new),
    })
}

pub fn throw_stmt(argument: Node) -> Node {
    Node::ThrowStatement(ThrowStatement {
        argument: Box::new(argument),
    })
}

pub fn declarator(name: &str, init: Option<Node>) -> Node {
    Node::VariableDeclarator(VariableDeclarator {
        id: Box::new(id(name)),
        init: init.map(Box::new),
    })
}

pub fn var_decl(kind: VariableKind, declarations: Vec<Node>) -> Node {
    Node::VariableDeclaration(VariableDeclaration { kind, declarations })
}

pub fn for_stmt(init: Option<Node>, test: Option<Node>, update: Option<Node>, body: Node) -> Node {
    Node::ForStatement(ForStatement {
        init: init.map(Box::new),
        test: test.map(Box::new),
        update: update.map(Box::new),
        body: Box::new(body),
    })
}

pub fn for_in(left: Node, right: Node, body: Node) -> Node {
    Node::ForInStatement(ForInStatement {
        left: Box::new(left),
        right: Box::new(right),
        body: Box::new(body),
    })
}

pub fn for_of(left: Node, right: Node, body: Node) -> Node {
    Node::ForOfStatement(ForOfStatement {
        left: Box::new(left),
        right: Box::new(right),
        body: Box::new(body),
    })
}

pub fn export_named(declaration: Node) -> Node {
    Node::ExportNamedDeclaration(ExportNamedDeclaration {
        declaration: Some(Box::new(declaration)),
    })
}

pub fn export_default(declaration: Node) -> Node {
    Node::ExportDefaultDeclaration(ExportDefaultDeclaration {
        declaration: Box::new(declaration),
    })
}

pub fn program(body: Vec<Node>) -> Node {
    Node::Program(Program { body })
}

pub fn array_type(element_type: Node) -> Node {
    Node::ArrayTypeAnnotation(ArrayTypeAnnotation {
        element_type: Box::new(element_type),
    })
}

pub fn nullable_type(type_annotation: Node) -> Node {
    Node::NullableTypeAnnotation(NullableTypeAnnotation {
        type_annotation: Box::new(type_annotation),
    })
}

pub fn function_type(params: Vec<Node>, return_type: Node) -> Node {
    Node::FunctionTypeAnnotation(FunctionTypeAnnotation {
        params,
        rest: None,
        return_type: Box::new(return_type),
    })
}

// Child accessors. The rules identify children by address, so tests must
// borrow the child out of its parent rather than build a copy.

pub fn left(node: &Node) -> &Node {
    node.as_binary_like().expect("binary-like node").left
}

pub fn right(node: &Node) -> &Node {
    match node {
        Node::AssignmentExpression(assign) => &assign.right,
        _ => node.as_binary_like().expect("binary-like node").right,
    }
}

pub fn object_of(node: &Node) -> &Node {
    match node {
        Node::MemberExpression(member) => &member.object,
        other => panic!("expected MemberExpression, got {}", other.kind()),
    }
}

pub fn callee(node: &Node) -> &Node {
    match node {
        Node::CallExpression(call) => &call.callee,
        Node::NewExpression(new) => &new.callee,
        other => panic!("expected a call, got {}", other.kind()),
    }
}

pub fn first_argument(node: &Node) -> &Node {
    match node {
        Node::CallExpression(call) => &call.arguments[0],
        Node::NewExpression(new) => &new.arguments[0],
        other => panic!("expected a call, got {}", other.kind()),
    }
}

pub fn argument(node: &Node) -> &Node {
    match node {
        Node::UnaryExpression(unary) => &unary.argument,
        Node::UpdateExpression(update) => &update.argument,
        Node::ReturnStatement(ret) => ret.argument.as_deref().expect("return argument"),
        Node::ThrowStatement(throw) => &throw.argument,
        Node::YieldExpression(expr) => expr.argument.as_deref().expect("yield argument"),
        other => panic!("expected a node with an argument, got {}", other.kind()),
    }
}

pub fn expression(node: &Node) -> &Node {
    match node {
        Node::ExpressionStatement(stmt) => &stmt.expression,
        other => panic!("expected ExpressionStatement, got {}", other.kind()),
    }
}

pub fn test_of(node: &Node) -> &Node {
    match node {
        Node::ConditionalExpression(cond) => &cond.test,
        other => panic!("expected ConditionalExpression, got {}", other.kind()),
    }
}

pub fn consequent(node: &Node) -> &Node {
    match node {
        Node::ConditionalExpression(cond) => &cond.consequent,
        other => panic!("expected ConditionalExpression, got {}", other.kind()),
    }
}

pub fn init(node: &Node) -> &Node {
    match node {
        Node::VariableDeclarator(decl) => decl.init.as_deref().expect("initializer"),
        other => panic!("expected VariableDeclarator, got {}", other.kind()),
    }
}

pub fn value(node: &Node) -> &Node {
    match node {
        Node::ObjectProperty(prop) => &prop.value,
        other => panic!("expected ObjectProperty, got {}", other.kind()),
    }
}

pub fn element_type(node: &Node) -> &Node {
    match node {
        Node::ArrayTypeAnnotation(array) => &array.element_type,
        other => panic!("expected ArrayTypeAnnotation, got {}", other.kind()),
    }
}

pub fn declaration(node: &Node) -> &Node {
    match node {
        Node::ExportDefaultDeclaration(export) => &export.declaration,
        Node::ExportNamedDeclaration(export) => export.declaration.as_deref().expect("declaration"),
        other => panic!("expected an export declaration, got {}", other.kind()),
    }
}

/// `left` and `right` of a for-in or for-of loop header
pub fn loop_head(node: &Node) -> (&Node, &Node) {
    match node {
        Node::ForInStatement(stmt) => (&stmt.left, &stmt.right),
        Node::ForOfStatement(stmt) => (&stmt.left, &stmt.right),
        other => panic!("expected a for-in or for-of loop, got {}", other.kind()),
    }
}

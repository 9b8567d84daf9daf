//! JavaScript code generation from the AST.
//!
//! A small printer: one statement per line, no comments, no
//! line-width handling. Its job is to show the parenthesization rules at
//! work, so a node is wrapped whenever [`ParenRules::needs_parens`] says so.
//! The only other parentheses are lexical ones the rules never see: an
//! object literal as an arrow body, an integer literal before `.`, and a call
//! inside a `new` callee.

mod expressions;
mod statements;
mod types;
mod utils;

use crate::ast::*;
use crate::config::Config;
use crate::debug_println;
use crate::parens::ParenRules;

pub struct CodeGenerator {
    output: String,
    indent_level: usize,
    config: Config,
    rules: ParenRules,
}

impl CodeGenerator {
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            output: String::new(),
            indent_level: 0,
            config,
            rules: ParenRules::standard(),
        }
    }

    /// Print with a custom rule table instead of the standard one
    pub fn with_rules(mut self, rules: ParenRules) -> Self {
        self.rules = rules;
        self
    }

    /// Print `root` and everything below it
    ///
    /// The root itself is never parenthesized.
    pub fn generate(&mut self, root: &Node) -> String {
        self.output.clear();
        self.indent_level = 0;
        self.generate_node(root, None);
        std::mem::take(&mut self.output)
    }

    /// Print `node`, wrapped in parentheses when its parent requires it
    fn generate_node(&mut self, node: &Node, parent: Option<&Node>) {
        let wrap = self.rules.needs_parens(node, parent);
        if wrap {
            debug_println!("codegen", "wrapping {} at byte {}", node.kind(), self.output.len());
            self.output.push('(');
        }

        match node {
            // Statements
            Node::Program(program) => self.generate_program(node, program),
            Node::ExpressionStatement(stmt) => self.generate_expression_statement(node, stmt),
            Node::BlockStatement(block) => self.generate_block(node, &block.body),
            Node::ReturnStatement(ret) => self.generate_return(node, ret),
            Node::ThrowStatement(throw) => self.generate_throw(node, throw),
            Node::VariableDeclaration(decl) => {
                self.generate_variable_declaration(node, decl, parent)
            }
            Node::VariableDeclarator(decl) => self.generate_variable_declarator(node, decl),
            Node::ForStatement(stmt) => self.generate_for(node, stmt),
            Node::ForInStatement(stmt) => {
                self.generate_for_each(node, &stmt.left, "in", &stmt.right, &stmt.body)
            }
            Node::ForOfStatement(stmt) => {
                self.generate_for_each(node, &stmt.left, "of", &stmt.right, &stmt.body)
            }
            Node::ExportDefaultDeclaration(export) => self.generate_export_default(node, export),
            Node::ExportNamedDeclaration(export) => self.generate_export_named(node, export),

            // Expressions
            Node::Identifier(id) => self.output.push_str(&id.name),
            Node::NumericLiteral(lit) => self.output.push_str(&lit.value.to_string()),
            Node::StringLiteral(lit) => self.generate_string(&lit.value),
            Node::BooleanLiteral(lit) => self.output.push_str(&lit.value.to_string()),
            Node::NullLiteral => self.output.push_str("null"),
            Node::ThisExpression => self.output.push_str("this"),
            Node::ArrayExpression(array) => self.generate_array(node, &array.elements),
            Node::ObjectExpression(object) => self.generate_object(node, &object.properties),
            Node::ObjectProperty(prop) => self.generate_property(node, prop),
            Node::SpreadElement(spread) => {
                self.output.push_str("...");
                self.generate_node(&spread.argument, Some(node));
            }
            Node::FunctionExpression(func) => self.generate_function(node, func),
            Node::ArrowFunctionExpression(arrow) => self.generate_arrow(node, arrow),
            Node::ClassExpression(class) => self.generate_class(node, class),
            Node::ClassBody(body) => self.generate_block(node, &body.body),
            Node::UnaryExpression(unary) => self.generate_unary(node, unary),
            Node::UpdateExpression(update) => self.generate_update(node, update),
            Node::BinaryExpression(binary) => {
                self.generate_infix(node, &binary.left, binary.operator.as_str(), &binary.right)
            }
            Node::LogicalExpression(logical) => {
                self.generate_infix(node, &logical.left, logical.operator.as_str(), &logical.right)
            }
            Node::AssignmentExpression(assign) => {
                self.generate_infix(node, &assign.left, assign.operator.as_str(), &assign.right)
            }
            Node::ConditionalExpression(cond) => self.generate_conditional(node, cond),
            Node::SequenceExpression(seq) => self.generate_list(node, &seq.expressions, ", "),
            Node::YieldExpression(expr) => self.generate_yield(node, expr),
            Node::CallExpression(call) => self.generate_call(node, &call.callee, &call.arguments),
            Node::NewExpression(new) => self.generate_new(node, new),
            Node::MemberExpression(member) => self.generate_member(node, member),
            Node::ObjectPattern(pattern) => self.generate_object(node, &pattern.properties),
            Node::ArrayPattern(pattern) => self.generate_array(node, &pattern.elements),

            // Flow types
            Node::ArrayTypeAnnotation(array) => {
                self.generate_node(&array.element_type, Some(node));
                self.output.push_str("[]");
            }
            Node::NullableTypeAnnotation(nullable) => {
                self.output.push('?');
                self.generate_node(&nullable.type_annotation, Some(node));
            }
            Node::FunctionTypeAnnotation(func) => self.generate_function_type(node, func),
            Node::FunctionTypeParam(param) => self.generate_function_type_param(node, param),
            Node::NumberTypeAnnotation => self.output.push_str("number"),
            Node::StringTypeAnnotation => self.output.push_str("string"),
            Node::VoidTypeAnnotation => self.output.push_str("void"),
            Node::GenericTypeAnnotation(generic) => self.generate_node(&generic.id, Some(node)),
        }

        if wrap {
            self.output.push(')');
        }
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Print `root` with the default configuration and standard rules
pub fn generate(root: &Node) -> String {
    CodeGenerator::new().generate(root)
}

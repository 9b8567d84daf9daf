//! Statement and declaration printing.

use super::CodeGenerator;
use crate::ast::*;

impl CodeGenerator {
    pub(super) fn generate_program(&mut self, node: &Node, program: &Program) {
        for stmt in &program.body {
            self.indent();
            self.generate_node(stmt, Some(node));
            self.output.push('\n');
        }
    }

    /// `{}` when empty, otherwise one indented member per line
    pub(super) fn generate_block(&mut self, node: &Node, body: &[Node]) {
        if body.is_empty() {
            self.output.push_str("{}");
            return;
        }

        self.output.push_str("{\n");
        self.indent_level += 1;
        for stmt in body {
            self.indent();
            self.generate_node(stmt, Some(node));
            self.output.push('\n');
        }
        self.indent_level -= 1;
        self.indent();
        self.output.push('}');
    }

    pub(super) fn generate_expression_statement(&mut self, node: &Node, stmt: &ExpressionStatement) {
        self.generate_node(&stmt.expression, Some(node));
        self.output.push(';');
    }

    pub(super) fn generate_return(&mut self, node: &Node, ret: &ReturnStatement) {
        self.output.push_str("return");
        if let Some(argument) = &ret.argument {
            self.output.push(' ');
            self.generate_node(argument, Some(node));
        }
        self.output.push(';');
    }

    pub(super) fn generate_throw(&mut self, node: &Node, throw: &ThrowStatement) {
        self.output.push_str("throw ");
        self.generate_node(&throw.argument, Some(node));
        self.output.push(';');
    }

    /// Declarations inside a for-loop header carry no semicolon
    pub(super) fn generate_variable_declaration(
        &mut self,
        node: &Node,
        decl: &VariableDeclaration,
        parent: Option<&Node>,
    ) {
        self.output.push_str(&decl.kind.to_string());
        self.output.push(' ');
        self.generate_list(node, &decl.declarations, ", ");
        if !parent.is_some_and(Node::is_for) {
            self.output.push(';');
        }
    }

    pub(super) fn generate_variable_declarator(&mut self, node: &Node, decl: &VariableDeclarator) {
        self.generate_node(&decl.id, Some(node));
        if let Some(init) = &decl.init {
            self.output.push_str(" = ");
            self.generate_node(init, Some(node));
        }
    }

    pub(super) fn generate_for(&mut self, node: &Node, stmt: &ForStatement) {
        self.output.push_str("for (");
        if let Some(init) = &stmt.init {
            self.generate_node(init, Some(node));
        }
        self.output.push(';');
        if let Some(test) = &stmt.test {
            self.output.push(' ');
            self.generate_node(test, Some(node));
        }
        self.output.push(';');
        if let Some(update) = &stmt.update {
            self.output.push(' ');
            self.generate_node(update, Some(node));
        }
        self.output.push_str(") ");
        self.generate_node(&stmt.body, Some(node));
    }

    /// `for (left in right)` and `for (left of right)`
    pub(super) fn generate_for_each(
        &mut self,
        node: &Node,
        left: &Node,
        keyword: &str,
        right: &Node,
        body: &Node,
    ) {
        self.output.push_str("for (");
        self.generate_node(left, Some(node));
        self.output.push(' ');
        self.output.push_str(keyword);
        self.output.push(' ');
        self.generate_node(right, Some(node));
        self.output.push_str(") ");
        self.generate_node(body, Some(node));
    }

    pub(super) fn generate_export_default(&mut self, node: &Node, export: &ExportDefaultDeclaration) {
        self.output.push_str("export default ");
        self.generate_node(&export.declaration, Some(node));
        self.output.push(';');
    }

    pub(super) fn generate_export_named(&mut self, node: &Node, export: &ExportNamedDeclaration) {
        match &export.declaration {
            Some(declaration) => {
                self.output.push_str("export ");
                self.generate_node(declaration, Some(node));
            }
            None => self.output.push_str("export {};"),
        }
    }
}

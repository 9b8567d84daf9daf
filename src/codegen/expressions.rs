//! Expression printing.

use super::CodeGenerator;
use crate::ast::*;

impl CodeGenerator {
    pub(super) fn generate_infix(&mut self, node: &Node, left: &Node, operator: &str, right: &Node) {
        self.generate_node(left, Some(node));
        self.output.push(' ');
        self.output.push_str(operator);
        self.output.push(' ');
        self.generate_node(right, Some(node));
    }

    /// `[a, , b]`; a trailing hole needs its own comma
    pub(super) fn generate_array(&mut self, node: &Node, elements: &[Option<Node>]) {
        self.output.push('[');
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            if let Some(element) = element {
                self.generate_node(element, Some(node));
            }
        }
        if matches!(elements.last(), Some(None)) {
            self.output.push(',');
        }
        self.output.push(']');
    }

    /// Object literals and object patterns
    pub(super) fn generate_object(&mut self, node: &Node, properties: &[Node]) {
        if properties.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push_str("{ ");
        self.generate_list(node, properties, ", ");
        self.output.push_str(" }");
    }

    pub(super) fn generate_property(&mut self, node: &Node, prop: &ObjectProperty) {
        if prop.shorthand {
            self.generate_node(&prop.value, Some(node));
            return;
        }

        if prop.computed {
            self.output.push('[');
            self.generate_node(&prop.key, Some(node));
            self.output.push(']');
        } else {
            self.generate_node(&prop.key, Some(node));
        }
        self.output.push_str(": ");
        self.generate_node(&prop.value, Some(node));
    }

    pub(super) fn generate_function(&mut self, node: &Node, func: &FunctionExpression) {
        self.output.push_str("function");
        if func.generator {
            self.output.push('*');
        }
        self.output.push(' ');
        if let Some(id) = &func.id {
            self.generate_node(id, Some(node));
        }
        self.generate_params(node, &func.params);
        self.output.push(' ');
        self.generate_node(&func.body, Some(node));
    }

    pub(super) fn generate_arrow(&mut self, node: &Node, arrow: &ArrowFunctionExpression) {
        self.generate_params(node, &arrow.params);
        self.output.push_str(" => ");
        // () => ({}) returns the object; () => {} is an empty body
        let object_body = matches!(*arrow.body, Node::ObjectExpression(_));
        self.generate_grouped(&arrow.body, node, object_body);
    }

    pub(super) fn generate_class(&mut self, node: &Node, class: &ClassExpression) {
        self.output.push_str("class");
        if let Some(id) = &class.id {
            self.output.push(' ');
            self.generate_node(id, Some(node));
        }
        if let Some(super_class) = &class.super_class {
            self.output.push_str(" extends ");
            self.generate_node(super_class, Some(node));
        }
        self.output.push(' ');
        self.generate_node(&class.body, Some(node));
    }

    pub(super) fn generate_unary(&mut self, node: &Node, unary: &UnaryExpression) {
        self.output.push_str(unary.operator.as_str());
        if unary.operator.is_keyword() || self.would_merge_sign(unary.operator, &unary.argument) {
            self.output.push(' ');
        }
        self.generate_node(&unary.argument, Some(node));
    }

    /// `- -x` and `+ ++x` must not collapse into `--x` / `+++x`
    fn would_merge_sign(&self, operator: UnaryOperator, argument: &Node) -> bool {
        let sign = match operator {
            UnaryOperator::Minus => '-',
            UnaryOperator::Plus => '+',
            _ => return false,
        };
        match argument {
            Node::UnaryExpression(inner) => inner.operator.as_str().starts_with(sign),
            Node::UpdateExpression(inner) if inner.prefix => {
                inner.operator.as_str().starts_with(sign)
            }
            _ => false,
        }
    }

    pub(super) fn generate_update(&mut self, node: &Node, update: &UpdateExpression) {
        if update.prefix {
            self.output.push_str(update.operator.as_str());
            self.generate_node(&update.argument, Some(node));
        } else {
            self.generate_node(&update.argument, Some(node));
            self.output.push_str(update.operator.as_str());
        }
    }

    pub(super) fn generate_conditional(&mut self, node: &Node, cond: &ConditionalExpression) {
        self.generate_node(&cond.test, Some(node));
        self.output.push_str(" ? ");
        self.generate_node(&cond.consequent, Some(node));
        self.output.push_str(" : ");
        self.generate_node(&cond.alternate, Some(node));
    }

    pub(super) fn generate_yield(&mut self, node: &Node, expr: &YieldExpression) {
        self.output.push_str("yield");
        if expr.delegate {
            self.output.push('*');
        }
        if let Some(argument) = &expr.argument {
            self.output.push(' ');
            self.generate_node(argument, Some(node));
        }
    }

    pub(super) fn generate_call(&mut self, node: &Node, callee: &Node, arguments: &[Node]) {
        self.generate_node(callee, Some(node));
        self.generate_params(node, arguments);
    }

    /// `new (a())()` and `new (a().b)()`: a call in the callee would otherwise
    /// take the argument list of the `new`
    pub(super) fn generate_new(&mut self, node: &Node, new: &NewExpression) {
        self.output.push_str("new ");
        self.generate_grouped(&new.callee, node, contains_call(&new.callee));
        self.generate_params(node, &new.arguments);
    }

    pub(super) fn generate_member(&mut self, node: &Node, member: &MemberExpression) {
        // (1).x since 1.x would read as a malformed number
        let integer_object = !member.computed
            && matches!(&*member.object, Node::NumericLiteral(lit) if is_integer_text(lit.value));
        self.generate_grouped(&member.object, node, integer_object);
        if member.computed {
            self.output.push('[');
            self.generate_node(&member.property, Some(node));
            self.output.push(']');
        } else {
            self.output.push('.');
            self.generate_node(&member.property, Some(node));
        }
    }
}

/// A call anywhere along the member chain of a `new` callee
fn contains_call(callee: &Node) -> bool {
    match callee {
        Node::CallExpression(_) => true,
        Node::MemberExpression(member) => contains_call(&member.object),
        _ => false,
    }
}

fn is_integer_text(value: f64) -> bool {
    value.to_string().bytes().all(|b| b.is_ascii_digit())
}

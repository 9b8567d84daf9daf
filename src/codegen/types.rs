//! Flow type annotation printing.

use super::CodeGenerator;
use crate::ast::*;

impl CodeGenerator {
    /// `(a: A, b?: B, ...rest: R) => T`
    pub(super) fn generate_function_type(&mut self, node: &Node, func: &FunctionTypeAnnotation) {
        self.output.push('(');
        self.generate_list(node, &func.params, ", ");
        if let Some(rest) = &func.rest {
            if !func.params.is_empty() {
                self.output.push_str(", ");
            }
            self.output.push_str("...");
            self.generate_node(rest, Some(node));
        }
        self.output.push_str(") => ");
        self.generate_node(&func.return_type, Some(node));
    }

    pub(super) fn generate_function_type_param(&mut self, node: &Node, param: &FunctionTypeParam) {
        if let Some(name) = &param.name {
            self.generate_node(name, Some(node));
            if param.optional {
                self.output.push('?');
            }
            self.output.push_str(": ");
        }
        self.generate_node(&param.type_annotation, Some(node));
    }
}

//! Code generation utilities.
//!
//! Indentation, separated lists and string quoting.

use super::CodeGenerator;
use crate::ast::Node;

impl CodeGenerator {
    /// Adds the current indentation level to the output
    pub(super) fn indent(&mut self) {
        let width = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat(' ').take(width));
    }

    /// Print `child` of `node`, adding parentheses the rule table cannot see
    ///
    /// Used only for lexical cases one level of ancestry does not decide, so
    /// `group` never coincides with a rule that already wraps `child`.
    pub(super) fn generate_grouped(&mut self, child: &Node, node: &Node, group: bool) {
        if group {
            self.output.push('(');
        }
        self.generate_node(child, Some(node));
        if group {
            self.output.push(')');
        }
    }

    /// Print `items` as children of `node`, separated by `separator`
    pub(super) fn generate_list(&mut self, node: &Node, items: &[Node], separator: &str) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.output.push_str(separator);
            }
            self.generate_node(item, Some(node));
        }
    }

    /// Parenthesized, comma separated parameters or call arguments
    pub(super) fn generate_params(&mut self, node: &Node, params: &[Node]) {
        self.output.push('(');
        self.generate_list(node, params, ", ");
        self.output.push(')');
    }

    /// Double-quoted string literal with JavaScript escapes
    pub(super) fn generate_string(&mut self, value: &str) {
        self.output.push('"');
        for c in value.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{2028}' | '\u{2029}' => {
                    self.output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c if c.is_control() => self.output.push_str(&format!("\\u{:04x}", c as u32)),
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }
}

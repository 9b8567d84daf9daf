//! Parenthesization decisions for the JavaScript printer.
//!
//! Before emitting a node, a printer asks [`needs_parens`] whether the node's
//! text must be wrapped in `( )` to keep the tree's structure when it is read
//! back. The answer depends only on the node and its immediate parent.
//!
//! Rules are looked up by [`NodeKind`] in a [`ParenRules`] table. Kinds with no
//! registered rule never need parentheses, and neither does the root.

mod expressions;
mod operators;
mod types;

pub use expressions::{
    arrow_function_expression, assignment_expression, class_expression, conditional_expression,
    function_expression, object_expression, sequence_expression, unary_like, update_expression,
    yield_expression,
};
pub use operators::{binary, binary_expression};
pub use types::type_in_array;

use crate::ast::{Node, NodeKind};
use crate::debug_println;
use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

/// A rule receives the node being printed and its parent
pub type ParenRule = fn(&Node, &Node) -> bool;

/// Registration table from node kind to rule
#[derive(Clone)]
pub struct ParenRules {
    rules: HashMap<NodeKind, ParenRule>,
}

impl ParenRules {
    /// A table with no rules: nothing is ever parenthesized
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// The built-in rules for JavaScript and Flow
    pub fn standard() -> Self {
        let mut table = Self::empty();
        table.register(NodeKind::NullableTypeAnnotation, type_in_array);
        table.register(NodeKind::FunctionTypeAnnotation, type_in_array);
        table.register(NodeKind::UpdateExpression, update_expression);
        table.register(NodeKind::UnaryExpression, unary_like);
        table.register(NodeKind::ObjectExpression, object_expression);
        table.register(NodeKind::LogicalExpression, binary);
        table.register(NodeKind::BinaryExpression, binary_expression);
        table.register(NodeKind::SequenceExpression, sequence_expression);
        table.register(NodeKind::YieldExpression, yield_expression);
        table.register(NodeKind::ClassExpression, class_expression);
        table.register(NodeKind::FunctionExpression, function_expression);
        table.register(NodeKind::ArrowFunctionExpression, arrow_function_expression);
        table.register(NodeKind::ConditionalExpression, conditional_expression);
        table.register(NodeKind::AssignmentExpression, assignment_expression);
        table
    }

    /// Add or replace the rule for `kind`, returning the one it displaced
    ///
    /// A rule that reads node fields must only be registered for kinds that
    /// carry them; [`binary`] for instance panics on non-binary nodes.
    pub fn register(&mut self, kind: NodeKind, rule: ParenRule) -> Option<ParenRule> {
        debug_println!("parens", "registering rule for {}", kind);
        self.rules.insert(kind, rule)
    }

    /// Drop the rule for `kind` so it falls back to "no parentheses"
    pub fn unregister(&mut self, kind: NodeKind) -> Option<ParenRule> {
        self.rules.remove(&kind)
    }

    pub fn rule_for(&self, kind: NodeKind) -> Option<ParenRule> {
        self.rules.get(&kind).copied()
    }

    /// Decide whether `node` must be wrapped when printed under `parent`
    ///
    /// `node` must be borrowed from inside `parent`: relationship checks such
    /// as "node is the callee" compare addresses.
    pub fn needs_parens(&self, node: &Node, parent: Option<&Node>) -> bool {
        let Some(parent) = parent else {
            return false;
        };
        let Some(rule) = self.rules.get(&node.kind()) else {
            return false;
        };

        let verdict = rule(node, parent);
        if verdict {
            debug_println!("parens", "{} under {} needs parentheses", node.kind(), parent.kind());
        }
        verdict
    }
}

impl Default for ParenRules {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for ParenRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<&NodeKind> = self.rules.keys().collect();
        kinds.sort();
        f.debug_struct("ParenRules").field("kinds", &kinds).finish()
    }
}

static STANDARD_RULES: OnceLock<ParenRules> = OnceLock::new();

/// The shared [`ParenRules::standard`] table, built on first use
pub fn standard_rules() -> &'static ParenRules {
    STANDARD_RULES.get_or_init(ParenRules::standard)
}

/// Decide with the standard rules whether `node` must be parenthesized
///
/// Returns `false` when `parent` is `None` (the root) and for node kinds that
/// have no rule.
pub fn needs_parens(node: &Node, parent: Option<&Node>) -> bool {
    standard_rules().needs_parens(node, parent)
}

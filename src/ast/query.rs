//! Whole-tree questions answered by walking the AST.

use super::{Node, NodeExt};
use crate::parens::ParenRules;
use std::collections::HashSet;
use std::convert::Infallible;

/// Query API for common whole-tree questions
pub struct AstQuery;

impl AstQuery {
    /// Every node the standard rules would wrap, in pre-order
    pub fn parenthesized(root: &Node) -> Vec<&Node> {
        Self::parenthesized_with(root, crate::parens::standard_rules())
    }

    /// Every node `rules` would wrap, in pre-order
    pub fn parenthesized_with<'a>(root: &'a Node, rules: &ParenRules) -> Vec<&'a Node> {
        let mut wrapped = Vec::new();
        let walked = root.walk(&mut |node, parent| {
            if rules.needs_parens(node, parent) {
                wrapped.push(node);
            }
            Ok::<(), Infallible>(())
        });
        match walked {
            Ok(()) => wrapped,
            Err(never) => match never {},
        }
    }

    /// Number of parenthesis pairs a printer would emit
    pub fn count_parenthesized(root: &Node) -> usize {
        Self::parenthesized(root).len()
    }

    /// Get all identifier names referenced anywhere in the tree
    pub fn collect_identifiers(root: &Node) -> HashSet<String> {
        root.find_nodes(|node| matches!(node, Node::Identifier(_)))
            .into_iter()
            .filter_map(|node| match node {
                Node::Identifier(id) => Some(id.name.clone()),
                _ => None,
            })
            .collect()
    }
}

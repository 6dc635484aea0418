//! Diagnostic tree rendering.
//!
//! Two renderings: a sideways drawing (right subtree above, left below, box
//! connectors) for quick inspection of shape, and a `termtree` conversion for
//! the CLI's top-down display. Neither participates in the functional
//! contract.

use std::fmt::Display;

use termtree::Tree as TermTree;

use crate::node::Node;
use crate::tree::Tree;

impl<T: Ord + Display> Tree<T> {
    /// Sideways drawing, right-then-left depth first. Empty tree renders as
    /// an empty string.
    ///
    /// ```text
    ///     ┌── 7
    /// └── 6
    ///         ┌── 5
    ///     └── 4
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();
        if let Some(root) = self.root() {
            render_node(root, "", true, &mut out);
        }
        out
    }

    /// Top-down rendering via `termtree`, children left then right.
    pub fn to_termtree(&self) -> Option<TermTree<String>> {
        self.root().map(to_termtree_node)
    }
}

fn render_node<T: Display>(node: &Node<T>, prefix: &str, is_left: bool, out: &mut String) {
    if let Some(right) = node.right() {
        let next = format!("{prefix}{}", if is_left { "│   " } else { "    " });
        render_node(right, &next, false, out);
    }
    out.push_str(prefix);
    out.push_str(if is_left { "└── " } else { "┌── " });
    out.push_str(&node.value().to_string());
    out.push('\n');
    if let Some(left) = node.left() {
        let next = format!("{prefix}{}", if is_left { "    " } else { "│   " });
        render_node(left, &next, true, out);
    }
}

fn to_termtree_node<T: Display>(node: &Node<T>) -> TermTree<String> {
    let leaves: Vec<_> = [node.left(), node.right()]
        .into_iter()
        .flatten()
        .map(to_termtree_node)
        .collect();
    TermTree::new(node.value().to_string()).with_leaves(leaves)
}

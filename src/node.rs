//! Tree node: one value plus exclusively owned child links.

use std::fmt;

/// Child slot. Each node is owned by exactly one parent slot (or the tree root).
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// Node in the binary search tree.
///
/// Invariant: every value in the left subtree compares less than `value`,
/// every value in the right subtree compares greater. Duplicates are never
/// stored. Nodes carry no parent link; ancestry is recomputed by descending
/// from the root.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// Right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Number of direct children (0, 1 or 2).
    pub fn count_children(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Height of the subtree rooted here, counted in nodes: a leaf has
    /// height 1, otherwise `1 + max(height(left), height(right))`.
    pub fn height(&self) -> usize {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        1 + left.max(right)
    }

    /// Shallow balance check: the heights of the immediate children differ
    /// by at most one. Deeper subtrees are not inspected.
    pub fn is_balanced(&self) -> bool {
        let left = self.left().map_or(0, Node::height);
        let right = self.right().map_or(0, Node::height);
        left.abs_diff(right) <= 1
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: i32) -> Box<Node<i32>> {
        Box::new(Node::new(value))
    }

    #[test]
    fn test_leaf_height_is_one() {
        let node = Node::new(5);
        assert!(node.is_leaf());
        assert_eq!(node.height(), 1);
        assert_eq!(node.count_children(), 0);
    }

    #[test]
    fn test_height_follows_longest_path() {
        let mut root = Node::new(10);
        root.left = Some(leaf(5));
        root.right = Some(leaf(15));
        root.right.as_mut().unwrap().right = Some(leaf(20));

        assert_eq!(root.height(), 3);
        assert_eq!(root.count_children(), 2);
    }

    #[test]
    fn test_shallow_balance_check() {
        let mut root = Node::new(10);
        root.right = Some(leaf(15));
        assert!(root.is_balanced());

        root.right.as_mut().unwrap().right = Some(leaf(20));
        assert!(!root.is_balanced());
    }
}

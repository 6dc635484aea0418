//! Traversal orders over the node graph.
//!
//! Each order comes in two forms: a convenience method returning the visited
//! values in order, and a `_visit` variant driving a node visitor. None of
//! them mutate the tree; an empty (sub)tree yields an empty sequence.

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

impl<T: Ord> Tree<T> {
    /// Left, node, right: values in ascending order. This sequence is what
    /// [`Tree::rebalance`] rebuilds from.
    pub fn inorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.inorder_visit(|node| values.push(node.value()));
        values
    }

    pub fn inorder_visit<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        Self::walk_inorder(self.root.as_deref(), &mut visit);
    }

    fn walk_inorder<'a>(node: Option<&'a Node<T>>, visit: &mut impl FnMut(&'a Node<T>)) {
        if let Some(node) = node {
            Self::walk_inorder(node.left(), visit);
            visit(node);
            Self::walk_inorder(node.right(), visit);
        }
    }

    /// Node, left, right.
    pub fn preorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.preorder_visit(|node| values.push(node.value()));
        values
    }

    pub fn preorder_visit<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        Self::walk_preorder(self.root.as_deref(), &mut visit);
    }

    fn walk_preorder<'a>(node: Option<&'a Node<T>>, visit: &mut impl FnMut(&'a Node<T>)) {
        if let Some(node) = node {
            visit(node);
            Self::walk_preorder(node.left(), visit);
            Self::walk_preorder(node.right(), visit);
        }
    }

    /// Left, right, node.
    pub fn postorder(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.postorder_visit(|node| values.push(node.value()));
        values
    }

    pub fn postorder_visit<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        Self::walk_postorder(self.root.as_deref(), &mut visit);
    }

    fn walk_postorder<'a>(node: Option<&'a Node<T>>, visit: &mut impl FnMut(&'a Node<T>)) {
        if let Some(node) = node {
            Self::walk_postorder(node.left(), visit);
            Self::walk_postorder(node.right(), visit);
            visit(node);
        }
    }

    /// Breadth-first from the root: top to bottom, left to right per level.
    pub fn level_order(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.level_order_visit(|node| values.push(node.value()));
        values
    }

    /// Breadth-first starting at an arbitrary node of this tree.
    pub fn level_order_from<'a>(&'a self, start: &'a Node<T>) -> Vec<&'a T> {
        let mut values = Vec::new();
        Self::walk_level_order(start, &mut |node| values.push(node.value()));
        values
    }

    pub fn level_order_visit<'a>(&'a self, mut visit: impl FnMut(&'a Node<T>)) {
        if let Some(root) = self.root.as_deref() {
            Self::walk_level_order(root, &mut visit);
        }
    }

    /// FIFO queue walk: dequeue a node, visit it, enqueue its left child
    /// then its right child.
    fn walk_level_order<'a>(start: &'a Node<T>, visit: &mut impl FnMut(&'a Node<T>)) {
        let mut queue = VecDeque::new();
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            visit(node);
            if let Some(left) = node.left() {
                queue.push_back(left);
            }
            if let Some(right) = node.right() {
                queue.push_back(right);
            }
        }
    }

    /// Borrowing in-order iterator.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_deref())
    }
}

/// In-order iterator holding the left spine of the remaining subtrees.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left(root);
        iter
    }

    fn push_left(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right());
        Some(node.value())
    }
}

impl<'a, T: Ord> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

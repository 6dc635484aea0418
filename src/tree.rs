//! Binary search tree with on-demand rebalancing.
//!
//! The tree never rebalances itself after `insert` or `delete`; callers
//! restore the logarithmic height guarantee explicitly via [`Tree::rebalance`].

use std::cmp::Ordering;

use itertools::Itertools;
use tracing::instrument;

use crate::errors::{TreeError, TreeResult};
use crate::node::{Link, Node};

/// Owning container for the node graph.
///
/// Construction from a collection deduplicates, sorts and performs a recursive
/// lower-median split, producing a tree of height `⌈log₂(n+1)⌉`. Subsequent
/// inserts and deletes can degrade the shape; [`Tree::rebalance`] rebuilds it
/// from the in-order sequence.
#[derive(Debug, Default)]
pub struct Tree<T> {
    pub(crate) root: Link<T>,
    len: usize,
}

impl<T: Ord> Tree<T> {
    /// Empty tree.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Build a height-balanced tree from an unordered collection.
    ///
    /// Duplicate values are dropped, the remainder is sorted ascending and
    /// split recursively at the lower middle index (`size / 2`).
    #[instrument(level = "debug", skip_all)]
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        let values: Vec<T> = values.into_iter().sorted().dedup().collect();
        let len = values.len();
        Self {
            root: Self::build_node(values),
            len,
        }
    }

    /// Recursive median split over an already sorted, deduplicated vector.
    fn build_node(mut values: Vec<T>) -> Link<T> {
        if values.is_empty() {
            return None;
        }
        let mid = values.len() / 2;
        let right = values.split_off(mid + 1);
        let value = values.pop()?;
        Some(Box::new(Node {
            value,
            left: Self::build_node(values),
            right: Self::build_node(right),
        }))
    }

    /// Number of values stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Root node, if any.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Insert a value, keeping the ordering invariant. Inserting a value
    /// already present is a silent no-op; the tree shape does not change.
    ///
    /// No rebalancing happens here; repeated ordered inserts degrade the
    /// shape until [`Tree::rebalance`] is called.
    #[instrument(level = "trace", skip_all)]
    pub fn insert(&mut self, value: T) {
        let mut cur = &mut self.root;
        while let Some(ref mut node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = &mut node.left,
                Ordering::Greater => cur = &mut node.right,
                Ordering::Equal => return,
            }
        }
        *cur = Some(Box::new(Node::new(value)));
        self.len += 1;
    }

    /// Locate a value, returning a read-only handle to its node.
    #[instrument(level = "trace", skip_all)]
    pub fn find(&self, value: &T) -> Option<&Node<T>> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match value.cmp(&node.value) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(node),
            }
        }
        None
    }

    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(|node| &Self::leftmost(node).value)
    }

    /// Largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.value)
    }

    /// Remove a value. Returns [`TreeError::NotFound`] and leaves the tree
    /// unchanged if the value is absent.
    ///
    /// A node with two children takes its replacement value from the leftmost
    /// node of its **left** subtree; that node is detached (splicing its right
    /// child, if any, into the vacated slot) and its value overwrites the
    /// target's. The replacement direction matches the original behaviour of
    /// this structure and is kept deliberately.
    #[instrument(level = "trace", skip_all)]
    pub fn delete(&mut self, value: &T) -> TreeResult<()> {
        let mut removed = false;
        let root = self.root.take();
        self.root = Self::remove_node(root, value, &mut removed);
        if removed {
            self.len -= 1;
            Ok(())
        } else {
            Err(TreeError::NotFound)
        }
    }

    fn remove_node(link: Link<T>, value: &T, removed: &mut bool) -> Link<T> {
        let Some(mut node) = link else {
            return None;
        };
        match value.cmp(&node.value) {
            Ordering::Less => node.left = Self::remove_node(node.left.take(), value, removed),
            Ordering::Greater => node.right = Self::remove_node(node.right.take(), value, removed),
            Ordering::Equal => {
                *removed = true;
                return match (node.left.take(), node.right.take()) {
                    (None, None) => None,
                    (Some(child), None) | (None, Some(child)) => Some(child),
                    (Some(left), Some(right)) => {
                        let mut left = Some(left);
                        if let Some(replacement) = Self::pop_leftmost(&mut left) {
                            node.value = replacement;
                        }
                        node.left = left;
                        node.right = Some(right);
                        Some(node)
                    }
                };
            }
        }
        Some(node)
    }

    /// Detach the leftmost node of the subtree and return its value. The
    /// leftmost node has no left child, so its right child (if any) is
    /// spliced into the vacated slot.
    fn pop_leftmost(link: &mut Link<T>) -> Option<T> {
        let mut cur = link;
        while cur.as_ref().is_some_and(|node| node.left.is_some()) {
            cur = &mut cur.as_mut()?.left;
        }
        let node = *cur.take()?;
        *cur = node.right;
        Some(node.value)
    }

    pub(crate) fn leftmost(node: &Node<T>) -> &Node<T> {
        let mut cur = node;
        while let Some(left) = cur.left.as_deref() {
            cur = left;
        }
        cur
    }

    /// Height of the whole tree (0 when empty).
    pub fn height(&self) -> usize {
        self.root.as_deref().map_or(0, Node::height)
    }

    /// Distance in edges from the root to the given node, recomputed by
    /// descending from the root and comparing values. Nodes carry no depth
    /// field and no parent link.
    ///
    /// Descent terminates at a missing child with [`TreeError::NotFound`];
    /// it can never loop.
    #[instrument(level = "trace", skip_all)]
    pub fn depth(&self, node: &Node<T>) -> TreeResult<usize> {
        let target = node.value();
        let mut cur = self.root.as_deref();
        let mut depth = 0;
        while let Some(node) = cur {
            match target.cmp(&node.value) {
                Ordering::Equal => return Ok(depth),
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
            }
            depth += 1;
        }
        Err(TreeError::NotFound)
    }

    /// Shallow balance check at the root: the heights of the root's immediate
    /// children differ by at most one. An empty tree is balanced.
    pub fn is_balanced(&self) -> bool {
        self.root.as_deref().map_or(true, Node::is_balanced)
    }

    /// Rebuild the tree from its in-order sequence, restoring the
    /// construction-time height guarantee. The value set never changes; the
    /// old node graph is discarded wholesale. O(n) per call.
    #[instrument(level = "debug", skip_all)]
    pub fn rebalance(&mut self) {
        let mut values = Vec::with_capacity(self.len);
        Self::drain_inorder(self.root.take(), &mut values);
        // in-order drain yields a sorted, duplicate-free sequence
        self.root = Self::build_node(values);
    }

    fn drain_inorder(link: Link<T>, out: &mut Vec<T>) {
        if let Some(node) = link {
            let node = *node;
            Self::drain_inorder(node.left, out);
            out.push(node.value);
            Self::drain_inorder(node.right, out);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

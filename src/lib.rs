//! # ordtree
//!
//! Binary search tree with on-demand rebalancing.
//!
//! The tree keeps the ordering invariant on every insert and delete but makes
//! no attempt to keep itself balanced: construction produces a height of
//! `⌈log₂(n+1)⌉`, repeated mutation may degrade that, and callers restore it
//! explicitly with [`Tree::rebalance`]. This trades per-operation rotation
//! bookkeeping for a single O(n) rebuild whenever the caller decides the
//! shape matters.
//!
//! ```
//! use ordtree::Tree;
//!
//! let mut tree = Tree::from_values([1, 2, 3, 4, 5, 6, 7]);
//! assert_eq!(tree.preorder(), vec![&4, &2, &1, &3, &6, &5, &7]);
//! assert_eq!(tree.height(), 3);
//!
//! for value in 8..=12 {
//!     tree.insert(value);
//! }
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! ```

pub mod cli;
mod display;
pub mod errors;
pub mod exitcode;
mod node;
mod traversal;
mod tree;
pub mod util;

pub use errors::{TreeError, TreeResult};
pub use node::Node;
pub use traversal::Iter;
pub use tree::Tree;

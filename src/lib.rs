//! A Binary Search Tree (BST) whose ordering is supplied by the caller
//! instead of an `Ord` bound on the element type.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores one element
//! and owns up to two child `Node`s. The important invariants of the tree
//! in this crate are:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key that
//!    compares strictly less than its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key that
//!    compares greater than *or equal to* its own key. Equal keys are routed
//!    right on insertion, so duplicates are retained rather than rejected.
//!
//! Two functions parameterize a [`Tree`]: a comparator giving a total order
//! over keys, and a key-extraction function projecting a stored element onto
//! its comparison key (identity by default, via [`std::borrow::Borrow`]).
//! This keeps the separation between what is stored and what is compared:
//! a tree of records can be ordered by any one field.
//!
//! No rebalancing is performed. The shape of the tree is purely a function
//! of insertion order, so searching takes `O(height)` and a sorted insertion
//! run degenerates the tree into a list. Callers who need guaranteed
//! logarithmic height want a self-balancing tree, not this one.
//!
//! Sorted iteration is exposed through [`Tree::traverse`], which walks every
//! node in one of four fixed orders and applies a callback to each element:
//!
//! ```
//! use ordered_tree::{Traversal, Tree};
//!
//! let mut tree: Tree<&str, str> = Tree::new(str::cmp);
//! for name in ["pear", "fig", "yuzu"] {
//!     tree.insert(name);
//! }
//!
//! let mut sorted = Vec::new();
//! let count = tree.traverse(Traversal::InOrder, |name| {
//!     sorted.push(*name);
//!     true
//! });
//!
//! assert_eq!(sorted, ["fig", "pear", "yuzu"]);
//! assert_eq!(count, 3);
//! ```

#![deny(missing_docs)]

mod error;
mod tree;

pub use error::TreeError;
pub use tree::{CmpFn, KeyFn, Traversal, Tree, TreeBuilder};

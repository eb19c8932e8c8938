//! A binary search tree ordered set with explicit rebalancing.
//!
//! This crate provides [`OrderedTree`], an ordered set of unique values kept in a
//! plain (non-self-balancing) binary search tree, together with the structural
//! introspection that such a tree invites:
//!
//! - [`height`](OrderedTree::height) and [`depth`](OrderedTree::depth) of any node
//! - [`is_balanced`](OrderedTree::is_balanced) - whether every node's subtrees differ in
//!   height by at most one
//! - [`rebalance`](OrderedTree::rebalance) - rebuild into a shape of minimum height
//! - visitor-driven [`pre_order`](OrderedTree::pre_order), [`in_order`](OrderedTree::in_order),
//!   [`post_order`](OrderedTree::post_order) and [`level_order`](OrderedTree::level_order) walks
//!
//! # Example
//!
//! ```
//! use ordered_tree::OrderedTree;
//!
//! let mut tree = OrderedTree::from([50, 20, 30, 40, 32, 34, 36, 70, 60, 65, 80, 75, 85]);
//!
//! let mut sorted = Vec::new();
//! tree.in_order(|node| sorted.push(*node.value()));
//! assert_eq!(sorted, [20, 30, 32, 34, 36, 40, 50, 60, 65, 70, 75, 80, 85]);
//!
//! // Inserts never rotate, so appending past the maximum unbalances the tree.
//! tree.insert(90);
//! tree.insert(95);
//! tree.insert(100);
//! assert!(!tree.is_balanced());
//!
//! tree.rebalance();
//! assert!(tree.is_balanced());
//! assert_eq!(tree.height(tree.root()), 4);
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Iterative walks** - Traversals and height use explicit stacks and queues, so
//!   degenerate trees cannot overflow the call stack
//! - **Borrow-checked node handles** - [`NodeRef`] borrows the tree, so no handle can
//!   survive a mutation
//!
//! # Implementation
//!
//! Nodes live in a slot arena and refer to their children by index. Deleted slots go on
//! a free list and are reused by later inserts. Deletion of a node with two children
//! splices in its in-order successor; rebalancing drains the values in order and rebuilds
//! by repeated midpoint selection.
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade: a `debug` record when a delete finds
//! nothing to remove and when the tree is rebalanced, a `trace` record when a tree is
//! built from sorted values.

#![no_std]
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod node_ref;
mod pretty;
mod raw;

pub mod ordered_tree;

pub use node_ref::NodeRef;
pub use ordered_tree::OrderedTree;
pub use pretty::Pretty;
pub use raw::Order;

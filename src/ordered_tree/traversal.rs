//! Visitor-driven walks over an [`OrderedTree`].
//!
//! Every walk calls the visitor exactly once per node, synchronously, and
//! never mutates the tree. Walks use an explicit stack or queue, so deep
//! (degenerate) trees cannot overflow the call stack.
//!
//! A visitor must be callable with a single [`NodeRef`]. Anything else is
//! rejected at compile time, before any node is visited:
//!
//! ```compile_fail
//! use ordered_tree::OrderedTree;
//!
//! let tree = OrderedTree::from([1, 2, 3]);
//! tree.in_order(42);
//! ```

use core::convert::Infallible;

use super::OrderedTree;
use crate::node_ref::NodeRef;
use crate::raw::Order;

impl<T> OrderedTree<T> {
    /// Calls `visit` on every node in the given `order`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, OrderedTree};
    ///
    /// let tree = OrderedTree::from([1, 2, 3, 4, 5]);
    ///
    /// let mut seen = Vec::new();
    /// tree.traverse(Order::LevelOrder, |node| seen.push(*node.value()));
    /// assert_eq!(seen, [3, 1, 4, 2, 5]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn traverse<F>(&self, order: Order, mut visit: F)
    where
        F: FnMut(NodeRef<'_, T>),
    {
        let result: Result<(), Infallible> = self.try_traverse(order, |node| {
            visit(node);
            Ok(())
        });
        match result {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// Calls `visit` on every node in the given `order`, stopping at the
    /// first error and returning it. Nodes after the failing one are not
    /// visited.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `visit`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{Order, OrderedTree};
    ///
    /// let tree = OrderedTree::from([1, 2, 3, 4, 5]);
    ///
    /// let mut seen = Vec::new();
    /// let result = tree.try_traverse(Order::InOrder, |node| {
    ///     if *node.value() > 3 {
    ///         return Err(*node.value());
    ///     }
    ///     seen.push(*node.value());
    ///     Ok(())
    /// });
    /// assert_eq!(result, Err(4));
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn try_traverse<E, F>(&self, order: Order, mut visit: F) -> Result<(), E>
    where
        F: FnMut(NodeRef<'_, T>) -> Result<(), E>,
    {
        self.raw.try_for_each(order, |handle| visit(NodeRef::new(&self.raw, handle)))
    }

    /// Visits each node before its left subtree, then its right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([1, 2, 3]);
    /// let mut seen = Vec::new();
    /// tree.pre_order(|node| seen.push(*node.value()));
    /// assert_eq!(seen, [2, 1, 3]);
    /// ```
    pub fn pre_order<F>(&self, visit: F)
    where
        F: FnMut(NodeRef<'_, T>),
    {
        self.traverse(Order::PreOrder, visit);
    }

    /// Visits the left subtree, then the node, then the right subtree. Values
    /// arrive in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([3, 1, 2]);
    /// let mut seen = Vec::new();
    /// tree.in_order(|node| seen.push(*node.value()));
    /// assert_eq!(seen, [1, 2, 3]);
    /// ```
    pub fn in_order<F>(&self, visit: F)
    where
        F: FnMut(NodeRef<'_, T>),
    {
        self.traverse(Order::InOrder, visit);
    }

    /// Visits both subtrees before the node itself.
    pub fn post_order<F>(&self, visit: F)
    where
        F: FnMut(NodeRef<'_, T>),
    {
        self.traverse(Order::PostOrder, visit);
    }

    /// Visits nodes breadth-first, one depth level at a time.
    pub fn level_order<F>(&self, visit: F)
    where
        F: FnMut(NodeRef<'_, T>),
    {
        self.traverse(Order::LevelOrder, visit);
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn collect(tree: &OrderedTree<i32>, order: Order) -> Vec<i32> {
        let mut seen = Vec::new();
        tree.traverse(order, |node| seen.push(*node.value()));
        seen
    }

    #[test]
    fn empty_tree_visits_nothing() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        for order in [Order::PreOrder, Order::InOrder, Order::PostOrder, Order::LevelOrder] {
            assert!(collect(&tree, order).is_empty());
        }
    }

    #[test]
    fn seven_node_orders() {
        let tree = OrderedTree::from([1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(collect(&tree, Order::PreOrder), [4, 2, 1, 3, 6, 5, 7]);
        assert_eq!(collect(&tree, Order::InOrder), [1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(collect(&tree, Order::PostOrder), [1, 3, 2, 5, 7, 6, 4]);
        assert_eq!(collect(&tree, Order::LevelOrder), [4, 2, 6, 1, 3, 5, 7]);
    }

    #[test]
    fn named_walks_match_traverse() {
        let tree = OrderedTree::from([8, 3, 10, 1, 6, 14, 4, 7, 13]);

        let mut pre = Vec::new();
        tree.pre_order(|n| pre.push(*n.value()));
        assert_eq!(pre, collect(&tree, Order::PreOrder));

        let mut post = Vec::new();
        tree.post_order(|n| post.push(*n.value()));
        assert_eq!(post, collect(&tree, Order::PostOrder));

        let mut level = Vec::new();
        tree.level_order(|n| level.push(*n.value()));
        assert_eq!(level, collect(&tree, Order::LevelOrder));

        let mut inorder = Vec::new();
        tree.in_order(|n| inorder.push(*n.value()));
        assert_eq!(inorder, [1, 3, 4, 6, 7, 8, 10, 13, 14]);
    }

    #[test]
    fn degenerate_chain_does_not_recurse() {
        let mut tree = OrderedTree::new();
        for v in (0..5_000).rev() {
            tree.insert(v);
        }
        let mut count = 0;
        tree.post_order(|_| count += 1);
        assert_eq!(count, 5_000);

        let mut last = -1;
        tree.in_order(|n| {
            assert!(*n.value() > last);
            last = *n.value();
        });
    }

    #[test]
    fn visitor_sees_child_links() {
        let tree = OrderedTree::from([1, 2, 3]);
        let mut leaves = 0;
        tree.level_order(|n| {
            if n.is_leaf() {
                leaves += 1;
            }
        });
        assert_eq!(leaves, 2);
    }
}

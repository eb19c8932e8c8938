use super::OrderedTree;
use crate::node_ref::NodeRef;

impl<T> OrderedTree<T> {
    /// Returns the number of edges on the longest path from `node` down to a
    /// leaf.
    ///
    /// An absent node has height -1 and a leaf has height 0, so the height of
    /// any node is `1 + max(height(left), height(right))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([1, 2, 3, 4]);
    /// assert_eq!(tree.height(tree.root()), 2);
    /// assert_eq!(tree.height(tree.find(&4)), 0);
    /// assert_eq!(tree.height(None), -1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(size of the subtree)
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn height(&self, node: Option<NodeRef<'_, T>>) -> isize {
        node.map_or(-1, |node| node.height())
    }

    /// Returns `true` if, at every node, the heights of the left and right
    /// subtrees differ by at most one. An empty tree is balanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([2, 1, 3]);
    /// assert!(tree.is_balanced());
    ///
    /// tree.insert(4);
    /// tree.insert(5);
    /// assert!(!tree.is_balanced());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n · height), since subtree heights are recomputed for every node.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        self.raw.is_balanced()
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Returns the number of edges from the root to the node holding the same
    /// value as `node`, or -1 if `node` is `None` or no such value is stored.
    ///
    /// The node is located by descending from the root and comparing values,
    /// so a node taken from another tree reports the depth of the equal value
    /// in this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([1, 2, 3, 4]);
    /// assert_eq!(tree.depth(tree.root()), 0);
    /// assert_eq!(tree.depth(tree.find(&4)), 2);
    /// assert_eq!(tree.depth(None), -1);
    ///
    /// let other = OrderedTree::from([9]);
    /// assert_eq!(tree.depth(other.root()), -1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn depth(&self, node: Option<NodeRef<'_, T>>) -> isize {
        node.map_or(-1, |node| self.raw.depth(node.value()))
    }

    /// Rebuilds the tree into a shape of minimum height.
    ///
    /// All values are drained in ascending order and laid out again by
    /// repeated midpoint selection; the old node structure is discarded. After
    /// this call [`is_balanced`](OrderedTree::is_balanced) returns `true` and
    /// the height of `n` values is `ceil(log2(n + 1)) - 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// for v in 0..7 {
    ///     tree.insert(v);
    /// }
    /// assert_eq!(tree.height(tree.root()), 6);
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(tree.root()), 2);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn rebalance(&mut self) {
        self.raw.rebalance();
    }
}

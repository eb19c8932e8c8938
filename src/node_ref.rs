use core::fmt;
use core::ptr;

use crate::raw::{Handle, RawOrderedTree};

/// A borrowed view of one node of an [`OrderedTree`](crate::OrderedTree).
///
/// A `NodeRef` borrows the tree immutably, so it cannot outlive any mutation
/// (insert, delete, rebalance) that might invalidate the node it names.
///
/// Two `NodeRef`s compare equal when they name the same node of the same
/// tree, not merely nodes holding equal values.
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let tree = OrderedTree::from([1, 2, 3]);
/// let root = tree.root().unwrap();
///
/// assert_eq!(root.value(), &2);
/// assert_eq!(root.left().map(|n| *n.value()), Some(1));
/// assert_eq!(root.right().map(|n| *n.value()), Some(3));
/// assert!(!root.is_leaf());
/// ```
pub struct NodeRef<'a, T> {
    tree: &'a RawOrderedTree<T>,
    handle: Handle,
}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) const fn new(tree: &'a RawOrderedTree<T>, handle: Handle) -> Self {
        Self { tree, handle }
    }

    /// Returns the value stored in this node.
    #[must_use]
    pub fn value(&self) -> &'a T {
        self.tree.node(self.handle).value()
    }

    /// Returns the root of the left subtree, if any.
    #[must_use]
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.tree.node(self.handle).left().map(|h| NodeRef::new(self.tree, h))
    }

    /// Returns the root of the right subtree, if any.
    #[must_use]
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.tree.node(self.handle).right().map(|h| NodeRef::new(self.tree, h))
    }

    /// Returns true if this node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.tree.node(self.handle).is_leaf()
    }

    /// Returns the number of edges on the longest path from this node down
    /// to a leaf. A leaf has height 0.
    ///
    /// # Complexity
    ///
    /// O(size of the subtree)
    #[must_use]
    pub fn height(&self) -> isize {
        self.tree.height(Some(self.handle))
    }
}

impl<T> Clone for NodeRef<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<'_, T> {}

impl<T> PartialEq for NodeRef<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree) && self.handle == other.handle
    }
}

impl<T> Eq for NodeRef<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for NodeRef<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let node = self.tree.node(self.handle);
        f.debug_struct("NodeRef")
            .field("value", node.value())
            .field("left", &node.left().is_some())
            .field("right", &node.right().is_some())
            .finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::OrderedTree;

    #[test]
    fn identity_not_value_equality() {
        let a = OrderedTree::from([1, 2, 3]);
        let b = OrderedTree::from([1, 2, 3]);

        assert_eq!(a.find(&2), a.root());
        assert_ne!(a.find(&2), b.find(&2));
        assert_ne!(a.find(&1), a.find(&3));
    }

    #[test]
    fn children_and_heights() {
        let tree = OrderedTree::from([1, 2, 3, 4]);
        let root = tree.root().unwrap();
        assert_eq!(root.height(), 2);

        let right = root.right().unwrap();
        assert_eq!(right.value(), &3);
        assert_eq!(right.height(), 1);
        assert!(right.left().is_none());

        let leaf = right.right().unwrap();
        assert!(leaf.is_leaf());
        assert_eq!(leaf.height(), 0);
    }

    #[test]
    fn debug_shows_child_presence() {
        let tree = OrderedTree::from([1, 2]);
        let root = tree.root().unwrap();
        assert_eq!(alloc::format!("{root:?}"), "NodeRef { value: 1, left: false, right: true }");
    }
}

use alloc::vec::Vec;
use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use crate::node_ref::NodeRef;
use crate::pretty::Pretty;
use crate::raw::{RawIter, RawOrderedTree};

mod balance;
mod capacity;
mod traversal;

/// An ordered set of unique values stored in an unbalanced binary search tree.
///
/// Building a tree from a collection (via [`FromIterator`], [`From<[T; N]>`] or
/// [`From<Vec<T>>`]) sorts and deduplicates the values and lays them out in a
/// shape of minimum height. After that, [`insert`] and [`delete`] only ever
/// attach and detach nodes; nothing rotates. Sorted appends therefore degrade
/// the tree toward a chain, which [`is_balanced`] detects and [`rebalance`]
/// repairs by rebuilding from scratch.
///
/// Every value in a node's left subtree is less than the node's value, and
/// every value in its right subtree is greater. It is a logic error for a
/// value to be modified in such a way that its ordering relative to any other
/// value changes while it is in the tree.
///
/// [`insert`]: OrderedTree::insert
/// [`delete`]: OrderedTree::delete
/// [`is_balanced`]: OrderedTree::is_balanced
/// [`rebalance`]: OrderedTree::rebalance
///
/// # Examples
///
/// ```
/// use ordered_tree::OrderedTree;
///
/// let mut tree = OrderedTree::from([50, 20, 30, 40, 32, 34, 36, 70, 60, 65, 80, 75, 85]);
/// assert!(tree.is_balanced());
///
/// for v in [90, 95, 100] {
///     tree.insert(v);
/// }
/// assert!(!tree.is_balanced());
///
/// tree.rebalance();
/// assert!(tree.is_balanced());
/// assert_eq!(tree.iter().copied().max(), Some(100));
/// ```
pub struct OrderedTree<T> {
    raw: RawOrderedTree<T>,
}

/// An iterator over the values of an `OrderedTree` in ascending order.
///
/// This `struct` is created by the [`iter`] method on [`OrderedTree`].
///
/// [`iter`]: OrderedTree::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    inner: RawIter<'a, T>,
}

/// An owning iterator over the values of an `OrderedTree` in ascending order.
///
/// This `struct` is created by the [`into_iter`] method on [`OrderedTree`]
/// (provided by the [`IntoIterator`] trait).
///
/// [`into_iter`]: OrderedTree#method.into_iter
pub struct IntoIter<T> {
    inner: alloc::vec::IntoIter<T>,
}

impl<T> OrderedTree<T> {
    /// Makes a new, empty `OrderedTree`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    /// ```
    #[must_use]
    pub const fn new() -> Self {
        OrderedTree {
            raw: RawOrderedTree::new(),
        }
    }

    /// Returns the number of values in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    #[must_use]
    pub const fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the tree contains no values.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Removes every value.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([1, 2]);
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// assert!(tree.root().is_none());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns the root node, or `None` if the tree is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, T>> {
        self.raw.root().map(|h| NodeRef::new(&self.raw, h))
    }

    /// Returns the smallest value, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([3, 1, 2]);
    /// assert_eq!(tree.first(), Some(&1));
    /// assert_eq!(tree.last(), Some(&3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn first(&self) -> Option<&T> {
        self.raw.first().map(|h| self.raw.node(h).value())
    }

    /// Returns the largest value, if any.
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn last(&self) -> Option<&T> {
        self.raw.last().map(|h| self.raw.node(h).value())
    }

    /// Gets an iterator that visits the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([3, 1, 2, 3]);
    /// let values: Vec<_> = tree.iter().copied().collect();
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.raw.iter() }
    }

    /// Returns a [`Display`](fmt::Display) adapter that draws the shape of the
    /// tree, one node per line, right subtree on top.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([1, 2, 3]);
    /// assert_eq!(tree.pretty().to_string(), "│   ┌── 3\n└── 2\n    └── 1\n");
    /// ```
    pub fn pretty(&self) -> Pretty<'_, T> {
        Pretty::new(self.root())
    }
}

impl<T: Ord> OrderedTree<T> {
    /// Adds a value to the tree as a new leaf.
    ///
    /// Returns whether the value was newly inserted. If an equal value is
    /// already present, `false` is returned and the tree is left unchanged.
    ///
    /// No rebalancing takes place, so repeated inserts on one side lengthen
    /// that side of the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert_eq!(tree.insert(2), true);
    /// assert_eq!(tree.insert(2), false);
    /// assert_eq!(tree.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, value: T) -> bool {
        self.raw.insert(value)
    }

    /// Returns the node holding a value equal to `value`, or `None` if the
    /// tree has no such value.
    ///
    /// The value may be any borrowed form of the tree's value type, but the
    /// ordering on the borrowed form *must* match the ordering on the value
    /// type.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([10, 20, 30]);
    ///
    /// let node = tree.find(&30).unwrap();
    /// assert_eq!(node.value(), &30);
    /// assert!(node.is_leaf());
    /// assert!(tree.find(&25).is_none());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn find<Q>(&self, value: &Q) -> Option<NodeRef<'_, T>>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(value).map(|h| NodeRef::new(&self.raw, h))
    }

    /// Returns `true` if the tree contains a value equal to `value`.
    #[must_use]
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(value).is_some()
    }

    /// Returns a reference to the stored value equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let tree = OrderedTree::from([String::from("a"), String::from("b")]);
    /// assert_eq!(tree.get("b"), Some(&String::from("b")));
    /// assert_eq!(tree.get("c"), None);
    /// ```
    #[must_use]
    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.search(value).map(|h| self.raw.node(h).value())
    }

    /// Removes the value equal to `value` from the tree. Returns whether such
    /// a value was present.
    ///
    /// A node with two children is replaced by its in-order successor (the
    /// smallest value of its right subtree); a node with one child is replaced
    /// by that child. A missing value is not an error: the tree is left
    /// unchanged, `false` is returned and a `debug` record is logged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([1, 2, 3]);
    /// assert_eq!(tree.delete(&2), true);
    /// assert_eq!(tree.delete(&2), false);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(3));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn delete<Q>(&mut self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(value).is_some()
    }

    /// Removes and returns the value equal to `value`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::from([1, 2, 3]);
    /// assert_eq!(tree.take(&2), Some(2));
    /// assert_eq!(tree.take(&2), None);
    /// ```
    pub fn take<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.remove(value)
    }
}

impl<T: Clone> Clone for OrderedTree<T> {
    fn clone(&self) -> Self {
        OrderedTree { raw: self.raw.clone() }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        OrderedTree::new()
    }
}

/// Two trees are equal when they hold the same values, whatever their shape.
impl<T: PartialEq> PartialEq for OrderedTree<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for OrderedTree<T> {}

/// Sorts and deduplicates the values, then builds a tree of minimum height.
impl<T: Ord> FromIterator<T> for OrderedTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let values: Vec<T> = iter.into_iter().collect();
        OrderedTree::from(values)
    }
}

impl<T: Ord> From<Vec<T>> for OrderedTree<T> {
    fn from(mut values: Vec<T>) -> Self {
        values.sort_unstable();
        values.dedup();
        OrderedTree {
            raw: RawOrderedTree::from_sorted_unique(values),
        }
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for OrderedTree<T> {
    fn from(values: [T; N]) -> Self {
        OrderedTree::from_iter(values)
    }
}

/// Inserts each value in turn, without rebalancing.
impl<T: Ord> Extend<T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: 'a + Ord + Copy> Extend<&'a T> for OrderedTree<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for &value in iter {
            self.insert(value);
        }
    }
}

impl<T> IntoIterator for OrderedTree<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Gets an iterator for moving out the values in ascending order.
    fn into_iter(mut self) -> IntoIter<T> {
        IntoIter {
            inner: self.raw.drain_sorted().into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.inner.remaining()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            inner: self.inner.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.inner.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.inner.as_slice()).finish()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn from_sorts_and_deduplicates() {
        let tree = OrderedTree::from(vec![5, 1, 5, 3, 1]);
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [1, 3, 5]);
        assert!(tree.is_balanced());
        tree.raw.validate_invariants();
    }

    #[test]
    fn extend_inserts_without_rebalancing() {
        let mut tree: OrderedTree<i32> = OrderedTree::new();
        tree.extend([1, 2, 3, 4]);
        assert_eq!(tree.height(tree.root()), 3);
        tree.extend(&[0, 4]);
        assert_eq!(tree.len(), 5);
        tree.raw.validate_invariants();
    }

    #[test]
    fn equality_ignores_shape() {
        let mut chain: OrderedTree<i32> = OrderedTree::new();
        chain.extend([1, 2, 3]);
        let balanced = OrderedTree::from([3, 2, 1]);
        assert_ne!(chain.root(), balanced.root());
        assert_eq!(chain, balanced);
        assert_ne!(chain, OrderedTree::from([1, 2]));
    }

    #[test]
    fn into_iter_drains_ascending() {
        let tree = OrderedTree::from([4, 2, 6, 1]);
        let mut iter = tree.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next_back(), Some(6));
        assert_eq!(iter.collect::<Vec<_>>(), [1, 2, 4]);
    }

    #[test]
    fn debug_formats_as_set() {
        let tree = OrderedTree::from([2, 1]);
        assert_eq!(alloc::format!("{tree:?}"), "{1, 2}");
        assert_eq!(alloc::format!("{:?}", tree.iter()), "[1, 2]");
    }

    #[test]
    fn clone_is_independent() {
        let mut original = OrderedTree::from([1, 2, 3]);
        let copy = original.clone();
        original.delete(&2);
        assert!(copy.contains(&2));
        assert!(!original.contains(&2));
        copy.raw.validate_invariants();
    }
}

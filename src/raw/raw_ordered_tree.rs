use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::borrow::Borrow;
use core::cmp::Ordering::{Equal, Greater, Less};

use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};

/// Inline capacity of the explicit traversal stacks. Covers any tree of
/// height below this without touching the heap.
pub(crate) const STACK_INLINE: usize = 32;

/// Explicit stack used in place of call recursion when walking the tree.
pub(crate) type Stack<E> = SmallVec<[E; STACK_INLINE]>;

/// Where a node hangs: the root link, or one side of a parent node.
type Link = Option<(Handle, Side)>;

/// Order in which a traversal visits nodes.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Order {
    /// Node, then its left subtree, then its right subtree.
    PreOrder,
    /// Left subtree, then the node, then its right subtree. Visits values in
    /// ascending order.
    InOrder,
    /// Left subtree, then right subtree, then the node.
    PostOrder,
    /// Breadth-first, shallowest level first, left to right within a level.
    LevelOrder,
}

/// The core binary search tree backing `OrderedTree`.
#[derive(Clone)]
pub(crate) struct RawOrderedTree<T> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<T>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
}

impl<T> RawOrderedTree<T> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
        }
    }

    /// Creates a new, empty tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
        }
    }

    /// Builds a height-balanced tree from values that are already sorted
    /// ascending and free of duplicates.
    pub(crate) fn from_sorted_unique(values: Vec<T>) -> Self {
        let mut tree = Self::with_capacity(values.len());
        tree.build(values);
        tree
    }

    /// Returns the number of values in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree contains no values.
    pub(crate) const fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// Drops every node.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    pub(crate) const fn root(&self) -> Option<Handle> {
        self.root
    }

    #[inline]
    pub(crate) fn node(&self, handle: Handle) -> &Node<T> {
        self.nodes.get(handle)
    }

    /// Replaces the current contents with a tree built from `values`, which
    /// must be sorted ascending and unique.
    ///
    /// Every subtree is rooted at the midpoint `floor((start + end) / 2)` of
    /// its index range, so the result has the minimum possible height.
    pub(crate) fn build(&mut self, values: Vec<T>) {
        fn link<T>(nodes: &mut Arena<Node<T>>, handles: &[Handle]) -> Option<Handle> {
            if handles.is_empty() {
                return None;
            }

            let mid = (handles.len() - 1) / 2;
            let left = link(nodes, &handles[..mid]);
            let right = link(nodes, &handles[mid + 1..]);

            let node = nodes.get_mut(handles[mid]);
            node.set_left(left);
            node.set_right(right);
            Some(handles[mid])
        }

        self.clear();
        self.nodes.reserve(values.len());

        let handles: Vec<Handle> = values.into_iter().map(|value| self.nodes.alloc(Node::leaf(value))).collect();
        self.root = link(&mut self.nodes, &handles);

        log::trace!("built balanced tree of {} nodes", handles.len());
    }

    /// Re-points whatever `link` names at `child`.
    fn relink(&mut self, link: Link, child: Option<Handle>) {
        match link {
            None => self.root = child,
            Some((parent, side)) => self.nodes.get_mut(parent).set_child(side, child),
        }
    }

    /// Returns the leftmost (minimum) node.
    pub(crate) fn first(&self) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(left) = self.node(current).left() {
            current = left;
        }
        Some(current)
    }

    /// Returns the rightmost (maximum) node.
    pub(crate) fn last(&self) -> Option<Handle> {
        let mut current = self.root?;
        while let Some(right) = self.node(current).right() {
            current = right;
        }
        Some(current)
    }

    /// Number of edges on the longest downward path from `handle`, or -1 for
    /// an absent subtree.
    ///
    /// Expands the subtree one level at a time instead of recursing, so the
    /// cost is bounded by the subtree size and never by call-stack depth.
    pub(crate) fn height(&self, handle: Option<Handle>) -> isize {
        let mut height = -1;
        let mut level: VecDeque<Handle> = handle.into_iter().collect();

        while !level.is_empty() {
            height += 1;
            for _ in 0..level.len() {
                let Some(current) = level.pop_front() else {
                    break;
                };
                let node = self.node(current);
                level.extend(node.left());
                level.extend(node.right());
            }
        }

        height
    }

    /// Returns true if, at every node, the heights of the two subtrees
    /// differ by at most one. An empty tree is balanced.
    pub(crate) fn is_balanced(&self) -> bool {
        let mut queue: VecDeque<Handle> = self.root.into_iter().collect();

        while let Some(current) = queue.pop_front() {
            let node = self.node(current);
            if self.height(node.left()).abs_diff(self.height(node.right())) > 1 {
                return false;
            }
            queue.extend(node.left());
            queue.extend(node.right());
        }

        true
    }

    /// Visits every node handle in `order`, stopping at the first error the
    /// visitor returns.
    pub(crate) fn try_for_each<E, F>(&self, order: Order, mut visit: F) -> Result<(), E>
    where
        F: FnMut(Handle) -> Result<(), E>,
    {
        let Some(root) = self.root else {
            return Ok(());
        };

        match order {
            Order::PreOrder => {
                let mut stack: Stack<Handle> = Stack::new();
                stack.push(root);
                while let Some(current) = stack.pop() {
                    let node = self.node(current);
                    stack.extend(node.right());
                    stack.extend(node.left());
                    visit(current)?;
                }
            }
            Order::InOrder => {
                let mut stack: Stack<Handle> = Stack::new();
                let mut next = Some(root);
                loop {
                    while let Some(current) = next {
                        stack.push(current);
                        next = self.node(current).left();
                    }
                    let Some(current) = stack.pop() else {
                        break;
                    };
                    visit(current)?;
                    next = self.node(current).right();
                }
            }
            Order::PostOrder => {
                // The flag records whether the node's children were already pushed.
                let mut stack: Stack<(Handle, bool)> = Stack::new();
                stack.push((root, false));
                while let Some((current, expanded)) = stack.pop() {
                    if expanded {
                        visit(current)?;
                        continue;
                    }
                    let node = self.node(current);
                    stack.push((current, true));
                    stack.extend(node.right().map(|h| (h, false)));
                    stack.extend(node.left().map(|h| (h, false)));
                }
            }
            Order::LevelOrder => {
                let mut queue: VecDeque<Handle> = VecDeque::new();
                queue.push_back(root);
                while let Some(current) = queue.pop_front() {
                    let node = self.node(current);
                    queue.extend(node.left());
                    queue.extend(node.right());
                    visit(current)?;
                }
            }
        }

        Ok(())
    }

    /// Removes every value in ascending order, leaving the tree empty.
    pub(crate) fn drain_sorted(&mut self) -> Vec<T> {
        let mut order = Vec::with_capacity(self.len());
        let _ = self.try_for_each::<(), _>(Order::InOrder, |handle| {
            order.push(handle);
            Ok(())
        });

        let values = order.into_iter().map(|handle| self.nodes.take(handle).into_value()).collect();
        self.clear();
        values
    }

    /// Returns an in-order iterator over the values.
    pub(crate) fn iter(&self) -> RawIter<'_, T> {
        RawIter::new(self)
    }
}

impl<T: Ord> RawOrderedTree<T> {
    /// Searches for a value and returns the handle of the node holding it.
    pub(crate) fn search<Q>(&self, key: &Q) -> Option<Handle>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            current = match key.cmp(node.value().borrow()) {
                Less => node.left(),
                Greater => node.right(),
                Equal => return Some(handle),
            };
        }
        None
    }

    /// Like `search`, but also returns the link the node hangs from.
    fn search_with_link<Q>(&self, key: &Q) -> Option<(Handle, Link)>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut link: Link = None;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            let side = match key.cmp(node.value().borrow()) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => return Some((handle, link)),
            };
            link = Some((handle, side));
            current = node.child(side);
        }
        None
    }

    /// Number of edges from the root to the node holding `key`, or -1 if the
    /// tree holds no such value.
    pub(crate) fn depth<Q>(&self, key: &Q) -> isize
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut depth = 0;
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.node(handle);
            current = match key.cmp(node.value().borrow()) {
                Less => node.left(),
                Greater => node.right(),
                Equal => return depth,
            };
            depth += 1;
        }
        -1
    }

    /// Inserts a value as a new leaf. Returns false, leaving the tree
    /// untouched, if an equal value is already present.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let Some(mut current) = self.root else {
            self.root = Some(self.nodes.alloc(Node::leaf(value)));
            return true;
        };

        let side = loop {
            let node = self.node(current);
            let side = match value.cmp(node.value()) {
                Less => Side::Left,
                Greater => Side::Right,
                Equal => return false,
            };
            match node.child(side) {
                Some(child) => current = child,
                None => break side,
            }
        };

        let leaf = self.nodes.alloc(Node::leaf(value));
        self.nodes.get_mut(current).set_child(side, Some(leaf));
        true
    }

    /// Removes the node holding `key` and returns its value.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let Some((target, link)) = self.search_with_link(key) else {
            log::debug!("remove: value not found among {} nodes", self.len());
            return None;
        };

        let node = self.node(target);
        match (node.left(), node.right()) {
            // Leaf, or a single child that moves up into the vacated slot.
            (None, None) => self.relink(link, None),
            (Some(only), None) | (None, Some(only)) => self.relink(link, Some(only)),
            (Some(left), Some(right)) => {
                // In-order successor: leftmost node of the right subtree.
                let mut successor_parent = target;
                let mut successor = right;
                while let Some(next) = self.node(successor).left() {
                    successor_parent = successor;
                    successor = next;
                }

                let successor_right = self.node(successor).right();
                let adopted_right = if successor_parent == target {
                    successor_right
                } else {
                    self.nodes.get_mut(successor_parent).set_left(successor_right);
                    Some(right)
                };

                let moved = self.nodes.get_mut(successor);
                moved.set_left(Some(left));
                moved.set_right(adopted_right);
                self.relink(link, Some(successor));
            }
        }

        Some(self.nodes.take(target).into_value())
    }

    /// Rebuilds the tree into minimum height from its in-order contents.
    pub(crate) fn rebalance(&mut self) {
        let before = self.height(self.root);
        let mut values = self.drain_sorted();
        values.dedup();
        self.build(values);

        log::debug!("rebalanced {} nodes: height {} -> {}", self.len(), before, self.height(self.root));
    }
}

/// Lazy in-order walk over a `RawOrderedTree`.
pub(crate) struct RawIter<'a, T> {
    tree: &'a RawOrderedTree<T>,
    stack: Stack<Handle>,
    remaining: usize,
}

impl<'a, T> RawIter<'a, T> {
    fn new(tree: &'a RawOrderedTree<T>) -> Self {
        let mut iter = Self {
            tree,
            stack: Stack::new(),
            remaining: tree.len(),
        };
        iter.push_left_spine(tree.root);
        iter
    }

    fn push_left_spine(&mut self, mut next: Option<Handle>) {
        while let Some(current) = next {
            self.stack.push(current);
            next = self.tree.node(current).left();
        }
    }

    pub(crate) const fn remaining(&self) -> usize {
        self.remaining
    }
}

impl<T> Clone for RawIter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            stack: self.stack.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for RawIter<'a, T> {
    type Item = (Handle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let tree = self.tree;
        let node = tree.node(current);
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some((current, node.value()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

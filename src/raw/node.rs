use super::handle::Handle;

/// Which child link of a parent a node hangs from.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// A single tree node: one value and two optional child links.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    value: T,
    left: Option<Handle>,
    right: Option<Handle>,
}

impl<T> Node<T> {
    /// Creates a node with no children.
    pub(crate) const fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn value(&self) -> &T {
        &self.value
    }

    pub(crate) fn into_value(self) -> T {
        self.value
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn set_left(&mut self, child: Option<Handle>) {
        self.left = child;
    }

    pub(crate) fn set_right(&mut self, child: Option<Handle>) {
        self.right = child;
    }

    /// Returns true if neither child link is set.
    pub(crate) const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn leaf_has_no_children() {
        let node = Node::leaf(7);
        assert!(node.is_leaf());
        assert_eq!(*node.value(), 7);
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), None);
    }

    #[test]
    fn set_child_by_side() {
        let mut node = Node::leaf(7);
        node.set_child(Side::Left, Some(Handle::from_index(3)));
        assert_eq!(node.child(Side::Left), Some(Handle::from_index(3)));
        assert_eq!(node.child(Side::Right), None);
        assert!(!node.is_leaf());

        node.set_child(Side::Right, Some(Handle::from_index(4)));
        node.set_left(None);
        assert_eq!(node.left(), None);
        assert_eq!(node.right(), Some(Handle::from_index(4)));
        assert_eq!(node.into_value(), 7);
    }
}

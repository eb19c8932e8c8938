use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::node_ref::NodeRef;

/// Draws the shape of an [`OrderedTree`](crate::OrderedTree) sideways.
///
/// Created by [`OrderedTree::pretty`](crate::OrderedTree::pretty). The right
/// subtree is printed above its parent and the left subtree below it, so the
/// output reads in descending order from top to bottom:
///
/// ```text
/// │       ┌── 7
/// │   ┌── 6
/// │   │   └── 5
/// └── 4
///     │   ┌── 3
///     └── 2
///         └── 1
/// ```
///
/// Only node values and child presence are read; the tree is never mutated.
pub struct Pretty<'a, T> {
    root: Option<NodeRef<'a, T>>,
}

enum Frame<'a, T> {
    Expand(NodeRef<'a, T>, String, bool),
    Emit(NodeRef<'a, T>, String, bool),
}

impl<'a, T> Pretty<'a, T> {
    pub(crate) const fn new(root: Option<NodeRef<'a, T>>) -> Self {
        Self { root }
    }
}

impl<T: fmt::Display> fmt::Display for Pretty<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `is_left` is true for left children and for the root.
        let mut stack: Vec<Frame<'_, T>> = Vec::new();
        stack.extend(self.root.map(|root| Frame::Expand(root, String::new(), true)));

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Emit(node, prefix, is_left) => {
                    let branch = if is_left { "└── " } else { "┌── " };
                    writeln!(f, "{prefix}{branch}{}", node.value())?;
                }
                Frame::Expand(node, prefix, is_left) => {
                    if let Some(left) = node.left() {
                        let indent = if is_left { "    " } else { "│   " };
                        stack.push(Frame::Expand(left, alloc::format!("{prefix}{indent}"), true));
                    }
                    if let Some(right) = node.right() {
                        let indent = if is_left { "│   " } else { "    " };
                        stack.push(Frame::Emit(node, prefix.clone(), is_left));
                        stack.push(Frame::Expand(right, alloc::format!("{prefix}{indent}"), false));
                    } else {
                        stack.push(Frame::Emit(node, prefix, is_left));
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::OrderedTree;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_tree_prints_nothing() {
        let tree: OrderedTree<i32> = OrderedTree::new();
        assert_eq!(tree.pretty().to_string(), "");
    }

    #[test]
    fn single_node() {
        let tree = OrderedTree::from([42]);
        assert_eq!(tree.pretty().to_string(), "└── 42\n");
    }

    #[test]
    fn seven_nodes() {
        let tree = OrderedTree::from([1, 2, 3, 4, 5, 6, 7]);
        let expected = "\
│       ┌── 7
│   ┌── 6
│   │   └── 5
└── 4
    │   ┌── 3
    └── 2
        └── 1
";
        assert_eq!(tree.pretty().to_string(), expected);
    }

    #[test]
    fn right_chain() {
        let mut tree: OrderedTree<i32> = OrderedTree::new();
        tree.extend([1, 2, 3]);
        let expected = "\
│       ┌── 3
│   ┌── 2
└── 1
";
        assert_eq!(tree.pretty().to_string(), expected);
    }
}

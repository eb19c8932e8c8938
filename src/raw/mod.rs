mod arena;
mod handle;
mod node;
mod raw_ordered_tree;

pub(crate) use handle::Handle;
pub use raw_ordered_tree::Order;
pub(crate) use raw_ordered_tree::{RawIter, RawOrderedTree};

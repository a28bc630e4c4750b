mod tree;
pub use self::tree::{Keys, RadixTree};

mod key;
pub use self::key::TreeKey;

mod node;
pub use self::node::debug::{TreeView, LEAF_MARKER};

#[cfg(test)]
mod proptests;

use std::iter;
use std::mem;
use std::slice;

use tracing::trace;

use super::key::{KeyMatchResult, KeyPrefix, KeyProbe};

/// Children of a node, kept in insertion order and scanned by first byte.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NodeChildren {
    children: Vec<RadixNode>,
}

impl NodeChildren {
    pub fn new() -> Self {
        NodeChildren {
            children: Vec::new(),
        }
    }

    pub fn position(&self, first_byte: u8) -> Option<usize> {
        self.children
            .iter()
            .position(|child| child.prefix.first() == Some(first_byte))
    }

    pub fn contains_child(&self, first_byte: u8) -> bool {
        self.position(first_byte).is_some()
    }

    pub fn get_child(&self, first_byte: u8) -> Option<&RadixNode> {
        self.position(first_byte).map(|idx| &self.children[idx])
    }

    pub fn push(&mut self, new_child: RadixNode) {
        debug_assert!(!new_child.prefix.is_empty());
        debug_assert!(new_child
            .prefix
            .first()
            .map_or(true, |byte| !self.contains_child(byte)));

        self.children.push(new_child);
    }

    pub fn iter(&self) -> ChildrenIter {
        ChildrenIter {
            iter: self.children.iter(),
        }
    }
}

pub struct ChildrenIter<'a> {
    iter: slice::Iter<'a, RadixNode>,
}

impl<'a> iter::Iterator for ChildrenIter<'a> {
    type Item = &'a RadixNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a> iter::DoubleEndedIterator for ChildrenIter<'a> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.iter.next_back()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixNode {
    prefix: KeyPrefix,
    children: NodeChildren,
    // Set when the path from the root down to here spells an inserted key.
    // Nodes with children can be leaves too.
    is_leaf: bool,
}

impl RadixNode {
    pub fn new_root() -> Self {
        RadixNode {
            prefix: KeyPrefix::empty(),
            children: NodeChildren::new(),
            is_leaf: false,
        }
    }

    pub fn new_leaf(prefix: KeyPrefix) -> Self {
        RadixNode {
            prefix,
            children: NodeChildren::new(),
            is_leaf: true,
        }
    }

    pub fn prefix(&self) -> &KeyPrefix {
        &self.prefix
    }

    pub fn children(&self) -> &NodeChildren {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.is_leaf
    }

    /// Cuts this node's label at `idx`. The tail moves into a new only child
    /// that inherits the old children and leaf flag; this node stops being a
    /// leaf.
    fn split_prefix(&mut self, idx: usize) {
        debug_assert!(idx > 0 && idx < self.prefix.len());

        let tail = RadixNode {
            prefix: self.prefix.split_off(idx),
            children: mem::replace(&mut self.children, NodeChildren::new()),
            is_leaf: mem::replace(&mut self.is_leaf, false),
        };

        self.children.push(tail);
    }
}

/// Inserts `probe` below `root`. Returns `true` when the key was not
/// present before.
pub fn iterative_insert(root: &mut RadixNode, mut probe: KeyProbe) -> bool {
    let mut current = root;

    loop {
        let next_byte = match probe.first() {
            Some(byte) => byte,
            None => return !mem::replace(&mut current.is_leaf, true),
        };

        let idx = match current.children.position(next_byte) {
            Some(idx) => idx,
            None => {
                trace!(branch = %probe, "appending new branch");
                current.children.push(RadixNode::new_leaf(KeyPrefix::from(probe)));
                return true;
            }
        };

        let child = &mut current.children.children[idx];
        match child.prefix.match_with(probe) {
            KeyMatchResult::Complete => {
                current = child;
                probe = KeyProbe::empty();
            }
            KeyMatchResult::Partial(remaining_probe) => {
                current = child;
                probe = remaining_probe;
            }
            KeyMatchResult::LongerPrefix(split_index) => {
                trace!(edge = %child.prefix, at = split_index, "splitting edge");
                child.split_prefix(split_index);
                child.is_leaf = true;
                return true;
            }
            KeyMatchResult::Incomplete(split_index, remaining_probe) => {
                trace!(edge = %child.prefix, at = split_index, "splitting edge");
                child.split_prefix(split_index);
                child
                    .children
                    .push(RadixNode::new_leaf(KeyPrefix::from(remaining_probe)));
                return true;
            }
        }
    }
}

pub fn recursive_find(current: &RadixNode, probe: KeyProbe) -> bool {
    let next_byte = match probe.first() {
        Some(byte) => byte,
        None => return current.is_leaf,
    };

    match current.children.get_child(next_byte) {
        Some(child) if probe.starts_with(&child.prefix) => {
            let (_, remaining_probe) = probe.split_at(child.prefix.len());
            recursive_find(child, remaining_probe)
        }
        _ => false,
    }
}

#[cfg(test)]
impl RadixNode {
    /// Panics if the subtree below this node breaks a structural invariant.
    pub(crate) fn assert_invariants(&self, is_root: bool) {
        if is_root {
            assert!(self.prefix.is_empty(), "root prefix must be empty");
        } else {
            assert!(!self.prefix.is_empty(), "child prefix must be non-empty");
        }

        let mut seen = Vec::new();
        for child in self.children.iter() {
            let first = child.prefix.first();
            assert!(
                !seen.contains(&first),
                "siblings share first byte {:?}",
                first
            );
            seen.push(first);
            child.assert_invariants(false);
        }
    }
}


pub mod debug {
    use std::fmt;

    use super::RadixNode;

    pub const LEAF_MARKER: &str = " \u{1F340}";

    /// Indented pre-order rendering of a subtree.
    ///
    /// Every node is one line holding its label, shifted right by the number
    /// of key bytes consumed above it.
    pub struct TreeView<'a> {
        root: &'a RadixNode,
    }

    impl<'a> TreeView<'a> {
        pub fn new(root: &'a RadixNode) -> Self {
            TreeView { root }
        }
    }

    impl<'a> fmt::Display for TreeView<'a> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            recursive_tree_format(self.root, f, 0)
        }
    }

    impl<'a> fmt::Debug for TreeView<'a> {
        fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
            fmt::Display::fmt(self, f)
        }
    }

    fn recursive_tree_format(
        current: &RadixNode,
        f: &mut fmt::Formatter,
        indent: usize,
    ) -> fmt::Result {
        let leaf_marker = if current.is_leaf { LEAF_MARKER } else { "" };
        writeln!(
            f,
            "{:indent$}{}{}",
            "",
            current.prefix,
            leaf_marker,
            indent = indent
        )?;

        for child in current.children.iter() {
            recursive_tree_format(child, f, indent + current.prefix.len())?;
        }

        Ok(())
    }
}

use std::io::Write;
use std::iter::FromIterator;

use tracing::debug;

use super::key::{KeyProbe, TreeKey};
use super::node::debug::TreeView;
use super::node::{iterative_insert, recursive_find, RadixNode};
use crate::errors::Result;

/// Set of byte strings stored as a compressed prefix tree.
#[derive(Debug, Clone)]
pub struct RadixTree {
    size: usize,
    root: RadixNode,
}

impl Default for RadixTree {
    fn default() -> Self {
        RadixTree::new()
    }
}

impl RadixTree {
    pub fn new() -> Self {
        RadixTree {
            size: 0,
            root: RadixNode::new_root(),
        }
    }

    /// Number of distinct keys inserted so far.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn insert<K: TreeKey + ?Sized>(&mut self, key: &K) {
        let probe = KeyProbe::new(key);

        if iterative_insert(&mut self.root, probe) {
            debug!(key = %probe, "inserted new key");
            self.size += 1;
        }
    }

    /// Returns `true` only if exactly `key` was inserted before.
    pub fn search<K: TreeKey + ?Sized>(&self, key: &K) -> bool {
        recursive_find(&self.root, KeyProbe::new(key))
    }

    /// Every inserted key, parents before the keys they prefix.
    pub fn keys(&self) -> Keys {
        Keys {
            stack: vec![(&self.root, Vec::new())],
        }
    }

    pub fn view(&self) -> TreeView {
        TreeView::new(&self.root)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", self.view())?;
        out.flush()?;

        Ok(())
    }

    /// Dumps the tree to stdout.
    pub fn print(&self) {
        print!("{}", self.view());
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &RadixNode {
        &self.root
    }
}

impl<K: TreeKey> Extend<K> for RadixTree {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(&key);
        }
    }
}

impl<K: TreeKey> FromIterator<K> for RadixTree {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut rax = RadixTree::new();
        rax.extend(iter);
        rax
    }
}

pub struct Keys<'a> {
    stack: Vec<(&'a RadixNode, Vec<u8>)>,
}

impl<'a> Iterator for Keys<'a> {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((node, mut path)) = self.stack.pop() {
            path.extend_from_slice(node.prefix().bytes());

            for child in node.children().iter().rev() {
                self.stack.push((child, path.clone()));
            }

            if node.is_leaf() {
                return Some(path);
            }
        }

        None
    }
}

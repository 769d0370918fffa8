//! Pre-order traversal and everything built on it: counting, key
//! collection, iteration, statistics, and invariant checking.
//!
//! The walk visits every edge in pre-order while maintaining a shared path
//! buffer holding the concatenated ancestor labels, extended before
//! descending into a child chain and truncated on the way back. Sibling
//! chains are iterated, not recursed, so stack depth tracks tree depth only.

use std::collections::HashSet;

use crate::error::{RadixSetError, Result};
use crate::trie::node::{Node, NodeId};
use crate::trie::tree::RadixTree;

/// Structural statistics for a [`RadixTree`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrieStats {
    /// Number of edges in the structure.
    pub num_nodes: usize,
    /// Number of stored strings.
    pub num_keys: usize,
    /// Length in bytes of the longest stored string.
    pub max_depth: usize,
    /// Total bytes held in edge labels.
    pub label_bytes: usize,
    /// Estimated heap memory used by nodes and labels, in bytes.
    pub memory_usage: usize,
}

impl TrieStats {
    /// Average label bytes per stored key; 0 when empty.
    pub fn bytes_per_key(&self) -> f64 {
        if self.num_keys == 0 {
            0.0
        } else {
            self.label_bytes as f64 / self.num_keys as f64
        }
    }
}

/// Sorted iterator over stored keys, returned by [`RadixTree::iter`] and
/// [`RadixTree::iter_prefix`].
#[derive(Debug)]
pub struct KeyIter {
    inner: std::vec::IntoIter<Vec<u8>>,
}

impl Iterator for KeyIter {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for KeyIter {}

impl RadixTree {
    /// Visit every edge in pre-order. The visitor receives the accumulated
    /// ancestor prefix (labels of all edges above, excluding the visited
    /// edge's own label) and the edge itself.
    pub(crate) fn walk_preorder<F>(&self, mut visit: F)
    where
        F: FnMut(&[u8], &Node),
    {
        let mut path = Vec::new();
        self.walk_from(self.root, &mut path, &mut visit);
    }

    fn walk_from<F>(&self, slot: Option<NodeId>, path: &mut Vec<u8>, visit: &mut F)
    where
        F: FnMut(&[u8], &Node),
    {
        let mut next = slot;
        while let Some(id) = next {
            let node = self.arena.get(id);
            visit(path, node);
            path.extend_from_slice(&node.label);
            self.walk_from(node.child, path, visit);
            path.truncate(path.len() - node.label.len());
            next = node.sibling;
        }
    }

    /// Number of edges currently in the structure.
    ///
    /// An internal-size metric: always at least [`len`](Self::len), with
    /// equality only when every edge is a single terminal edge.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk_preorder(|_, _| count += 1);
        count
    }

    /// All stored strings in lexicographic byte order.
    pub fn keys(&self) -> Vec<Vec<u8>> {
        let mut keys = Vec::with_capacity(self.len());
        self.walk_preorder(|prefix, node| {
            if node.terminal {
                let mut key = Vec::with_capacity(prefix.len() + node.label.len());
                key.extend_from_slice(prefix);
                key.extend_from_slice(&node.label);
                keys.push(key);
            }
        });
        crate::algorithms::heap_sort(&mut keys);
        keys
    }

    /// Sorted iterator over all stored strings.
    pub fn iter(&self) -> KeyIter {
        KeyIter {
            inner: self.keys().into_iter(),
        }
    }

    /// Sorted iterator over the stored strings starting with `prefix`.
    /// An empty prefix yields every key.
    pub fn iter_prefix(&self, prefix: &[u8]) -> KeyIter {
        let keys: Vec<Vec<u8>> = self
            .keys()
            .into_iter()
            .filter(|key| key.starts_with(prefix))
            .collect();
        KeyIter {
            inner: keys.into_iter(),
        }
    }

    /// Collect structural statistics in one traversal.
    pub fn stats(&self) -> TrieStats {
        let mut stats = TrieStats {
            num_keys: self.len(),
            ..Default::default()
        };
        self.walk_preorder(|prefix, node| {
            stats.num_nodes += 1;
            stats.label_bytes += node.label.len();
            if node.terminal {
                stats.max_depth = stats.max_depth.max(prefix.len() + node.label.len());
            }
        });
        stats.memory_usage =
            stats.num_nodes * std::mem::size_of::<Node>() + stats.label_bytes;
        stats
    }

    /// Verify every structural invariant of the tree, walking the whole
    /// graph. Returns a [`RadixSetError::Corruption`] naming the first
    /// violation found.
    ///
    /// Checked:
    /// - every label holds at least one byte;
    /// - compression: no non-terminal edge has a sole child (join applied);
    /// - sibling labels under one parent never share a leading byte;
    /// - no node is reachable twice (strict tree, no aliasing);
    /// - the maintained string count matches the number of terminal edges;
    /// - the arena's live-slot count matches the number of reachable nodes.
    pub fn check_invariants(&self) -> Result<()> {
        let mut visited = HashSet::new();
        let mut terminal_count = 0;
        self.check_level(self.root, &mut visited, &mut terminal_count)?;

        if terminal_count != self.len() {
            return Err(RadixSetError::corruption(format!(
                "maintained count {} disagrees with {} terminal edges",
                self.len(),
                terminal_count
            )));
        }
        if visited.len() != self.arena.len() {
            return Err(RadixSetError::corruption(format!(
                "arena holds {} nodes but {} are reachable",
                self.arena.len(),
                visited.len()
            )));
        }
        Ok(())
    }

    fn check_level(
        &self,
        slot: Option<NodeId>,
        visited: &mut HashSet<NodeId>,
        terminal_count: &mut usize,
    ) -> Result<()> {
        let mut first_bytes: Vec<u8> = Vec::new();
        let mut next = slot;
        while let Some(id) = next {
            if !visited.insert(id) {
                return Err(RadixSetError::corruption(format!(
                    "node {} reachable from two parents",
                    id
                )));
            }
            let node = self.arena.get(id);

            if node.label.is_empty() {
                return Err(RadixSetError::corruption(format!(
                    "node {} has an empty label",
                    id
                )));
            }
            if node.terminal {
                *terminal_count += 1;
            }

            // I2: siblings must not share any leading bytes, which for a
            // byte alphabet reduces to pairwise-distinct first bytes.
            let first = node.label[0];
            if first_bytes.contains(&first) {
                return Err(RadixSetError::corruption(format!(
                    "sibling labels share leading byte {:#04x}",
                    first
                )));
            }
            first_bytes.push(first);

            // I1: an unbranched non-terminal chain link must have been
            // joined with its child.
            if let Some(child_id) = node.child {
                if !node.terminal && self.arena.get(child_id).sibling.is_none() {
                    return Err(RadixSetError::corruption(format!(
                        "node {} is an uncombined single-child chain",
                        id
                    )));
                }
                self.check_level(Some(child_id), visited, terminal_count)?;
            }
            next = node.sibling;
        }
        Ok(())
    }
}

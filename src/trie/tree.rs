//! Core radix tree operations: insert with split, remove with join, search.
//!
//! All structural operations are recursive over the first-child/next-sibling
//! node graph and return the replacement subtree root for their parent slot,
//! so rewiring happens on the way back up. Recursion depth is bounded by the
//! configured maximum key length plus the sibling fan-out of a level.

use log::{debug, trace};

use crate::config::RadixTreeConfig;
use crate::error::{RadixSetError, Result};
use crate::trie::node::{Node, NodeArena, NodeId};

/// Length of the longest common leading byte run of `a` and `b`.
pub(crate) fn common_prefix_len(a: &[u8], b: &[u8]) -> usize {
    let mut i = 0;
    while i < a.len() && i < b.len() && a[i] == b[i] {
        i += 1;
    }
    i
}

/// Compressed radix search trie storing a set of byte strings.
///
/// Each node is an edge carrying a multi-byte label; alternatives at a
/// branching point form a sibling chain and deeper continuations hang off the
/// child link. Insertion splits an edge when a new key shares only part of
/// its label, and removal joins single-child chains back together, so the
/// structure stays path-compressed under any workload.
///
/// # Examples
///
/// ```rust
/// use radixset::RadixTree;
///
/// # fn main() -> radixset::Result<()> {
/// let mut tree = RadixTree::new();
/// tree.insert(b"AC")?;
/// tree.insert(b"ACGT")?;
///
/// assert!(tree.contains(b"AC"));
/// assert!(tree.contains(b"ACGT"));
/// assert!(!tree.contains(b"A"));
///
/// tree.remove(b"AC")?;
/// assert!(!tree.contains(b"AC"));
/// assert!(tree.contains(b"ACGT"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RadixTree {
    pub(crate) arena: NodeArena,
    pub(crate) root: Option<NodeId>,
    len: usize,
    config: RadixTreeConfig,
}

impl RadixTree {
    /// Create an empty tree with the default configuration.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::default(),
            root: None,
            len: 0,
            config: RadixTreeConfig::default(),
        }
    }

    /// Create an empty tree with `capacity` node slots pre-allocated.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: NodeArena::with_capacity(capacity),
            root: None,
            len: 0,
            config: RadixTreeConfig::default(),
        }
    }

    /// Create an empty tree from a validated configuration.
    pub fn with_config(config: RadixTreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            arena: NodeArena::with_capacity(config.initial_capacity),
            root: None,
            len: 0,
            config,
        })
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> &RadixTreeConfig {
        &self.config
    }

    /// Number of distinct strings currently stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when no strings are stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every stored string, keeping the arena allocation for reuse.
    pub fn clear(&mut self) {
        debug!("clear: dropping {} strings, {} nodes", self.len, self.arena.len());
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    /// Add `key` to the set.
    ///
    /// Returns `Ok(true)` if the key was newly stored and `Ok(false)` if it
    /// was already present; duplicate inserts leave the structure untouched.
    ///
    /// # Errors
    ///
    /// [`RadixSetError::EmptyKey`] for zero-length keys and
    /// [`RadixSetError::KeyTooLong`] for keys beyond the configured maximum.
    pub fn insert(&mut self, key: &[u8]) -> Result<bool> {
        if key.is_empty() {
            return Err(RadixSetError::EmptyKey);
        }
        if key.len() > self.config.max_key_len {
            return Err(RadixSetError::key_too_long(key.len(), self.config.max_key_len));
        }

        let (root, added) = self.insert_at(self.root, key);
        self.root = Some(root);
        if added {
            self.len += 1;
        }
        Ok(added)
    }

    /// Remove `key` from the set.
    ///
    /// Returns `Ok(true)` if the key was present and `Ok(false)` otherwise;
    /// removing an absent key is a no-op, never an error. Keys the tree
    /// could not have stored (empty or over-long) are absent by definition.
    pub fn remove(&mut self, key: &[u8]) -> Result<bool> {
        if key.is_empty() || key.len() > self.config.max_key_len {
            return Ok(false);
        }

        let (root, removed) = self.remove_at(self.root, key);
        self.root = root;
        if removed {
            self.len -= 1;
        }
        Ok(removed)
    }

    /// True iff `key` is currently stored.
    pub fn contains(&self, key: &[u8]) -> bool {
        if key.is_empty() || key.len() > self.config.max_key_len {
            return false;
        }
        self.find_at(self.root, key).is_some()
    }

    /// Insert `key` into the subtree rooted at `slot`, returning the
    /// (possibly new) subtree root and whether a new string was stored.
    fn insert_at(&mut self, slot: Option<NodeId>, key: &[u8]) -> (NodeId, bool) {
        let id = match slot {
            Some(id) => id,
            None => return (self.arena.alloc(Node::leaf(key.to_vec())), true),
        };

        let node = self.arena.get(id);
        let p = common_prefix_len(key, &node.label);
        let label_len = node.label.len();
        let sibling = node.sibling;
        let child = node.child;

        if p == 0 {
            // No overlap with this edge: the key belongs in the sibling chain.
            let (new_sibling, added) = self.insert_at(sibling, key);
            self.arena.get_mut(id).sibling = Some(new_sibling);
            (id, added)
        } else if p < label_len {
            // Partial overlap: break the edge so the shared run becomes its
            // own edge, then place the key remainder under it.
            self.split(id, p);
            if p == key.len() {
                let node = self.arena.get_mut(id);
                let added = !node.terminal;
                node.terminal = true;
                (id, added)
            } else {
                let succ = self.arena.get(id).child;
                let (new_child, added) = self.insert_at(succ, &key[p..]);
                self.arena.get_mut(id).child = Some(new_child);
                (id, added)
            }
        } else if p == key.len() {
            // Key consumed exactly at the edge boundary; idempotent on
            // duplicates.
            let node = self.arena.get_mut(id);
            let added = !node.terminal;
            node.terminal = true;
            (id, added)
        } else {
            // Edge fully consumed: descend with the remainder.
            let (new_child, added) = self.insert_at(child, &key[p..]);
            self.arena.get_mut(id).child = Some(new_child);
            (id, added)
        }
    }

    /// Break the edge at `id` into a `k`-byte prefix edge and a successor
    /// carrying the rest of the label. The successor inherits the child link
    /// and the terminal flag; the sibling link stays with the prefix edge.
    fn split(&mut self, id: NodeId, k: usize) {
        let node = self.arena.get_mut(id);
        debug_assert!(
            k > 0 && k < node.label.len(),
            "split point must fall strictly inside the label"
        );
        let tail = node.label.split_off(k);
        let terminal = std::mem::replace(&mut node.terminal, false);
        let child = node.child.take();
        trace!("split: edge broken after {} bytes, {} bytes moved to successor", k, tail.len());

        let succ = self.arena.alloc(Node {
            label: tail,
            terminal,
            sibling: None,
            child,
        });
        self.arena.get_mut(id).child = Some(succ);
    }

    /// Remove `key` from the subtree rooted at `slot`, returning the
    /// replacement for the parent slot and whether a string was removed.
    fn remove_at(&mut self, slot: Option<NodeId>, key: &[u8]) -> (Option<NodeId>, bool) {
        let id = match slot {
            Some(id) => id,
            None => return (None, false),
        };

        let node = self.arena.get(id);
        let p = common_prefix_len(key, &node.label);
        let label_len = node.label.len();
        let terminal = node.terminal;
        let sibling = node.sibling;
        let child = node.child;

        if p == 0 {
            // Not this edge: continue along the sibling chain.
            let (new_sibling, removed) = self.remove_at(sibling, key);
            self.arena.get_mut(id).sibling = new_sibling;
            (Some(id), removed)
        } else if p < label_len {
            // Key diverges inside this edge; nothing stored here.
            (Some(id), false)
        } else if p == key.len() {
            if !terminal {
                // Path exists structurally but was never stored as a key.
                return (Some(id), false);
            }
            self.arena.get_mut(id).terminal = false;
            if child.is_none() {
                // Leaf edge: unlink it and splice the sibling chain.
                let node = self.arena.free(id);
                (node.sibling, true)
            } else {
                // The edge still carries continuations; it may now be an
                // unbranched chain link, so re-establish compression.
                self.try_join(id);
                (Some(id), true)
            }
        } else {
            // Edge fully consumed: descend with the remainder, then restore
            // compression if the removal below left a sole child.
            let (new_child, removed) = self.remove_at(child, &key[p..]);
            self.arena.get_mut(id).child = new_child;
            if removed {
                self.try_join(id);
            }
            (Some(id), removed)
        }
    }

    /// Merge the edge at `id` with its sole child when neither a terminal
    /// mark nor a branch justifies keeping them separate. Inverse of
    /// [`Self::split`].
    fn try_join(&mut self, id: NodeId) {
        let node = self.arena.get(id);
        if node.terminal {
            return;
        }
        let child_id = match node.child {
            Some(child_id) => child_id,
            None => return,
        };
        if self.arena.get(child_id).sibling.is_some() {
            return;
        }

        let child = self.arena.free(child_id);
        debug_assert!(child.sibling.is_none());
        let node = self.arena.get_mut(id);
        node.label.extend_from_slice(&child.label);
        node.terminal = child.terminal;
        node.child = child.child;
        trace!("join: absorbed sole child, label now {} bytes", node.label.len());
    }

    /// Walk the matching phase read-only; `Some` iff `key` is consumed
    /// exactly at an edge boundary marked terminal.
    fn find_at(&self, slot: Option<NodeId>, key: &[u8]) -> Option<NodeId> {
        let id = slot?;
        let node = self.arena.get(id);
        let p = common_prefix_len(key, &node.label);

        if p == 0 {
            self.find_at(node.sibling, key)
        } else if p < node.label.len() {
            None
        } else if p == key.len() {
            if node.terminal {
                Some(id)
            } else {
                None
            }
        } else {
            self.find_at(node.child, &key[p..])
        }
    }
}

impl Default for RadixTree {
    fn default() -> Self {
        Self::new()
    }
}

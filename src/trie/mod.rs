//! Compressed radix search trie over byte strings.
//!
//! The trie is an edge-labeled first-child/next-sibling graph: every node
//! carries a multi-byte label, alternatives at a branching point form a
//! sibling chain, and continuations hang off the child link. Insertion splits
//! edges on partial label overlap; removal joins unbranched chains back
//! together, so paths stay compressed under any workload.

mod node;
mod report;
mod tree;
mod walk;

pub use tree::RadixTree;
pub use walk::{KeyIter, TrieStats};

//! # Radixset: Compressed Radix Search Trie for Byte-String Sets
//!
//! This crate provides an in-memory set of byte strings backed by a compressed
//! multiway trie (radix search trie / de la Briandais tree), with reporting
//! views for inspecting the structure.
//!
//! ## Key Features
//!
//! - **Path Compression**: Multi-byte edge labels; insertion splits edges on
//!   partial overlap and removal joins unbranched chains back together
//! - **Full Byte Alphabet**: Stored strings end at an explicit terminal flag,
//!   so every byte value including 0 is usable in keys
//! - **Arena Storage**: Nodes live in an index-addressed arena with a free
//!   list; removal churn reuses slots instead of growing the backing vector
//! - **Sorted Access**: Lexicographic key listing and prefix iteration
//! - **Reporting Views**: Node dump, tree visualization, and sorted string
//!   listing emitted to pluggable sinks with optional echo duplication
//! - **Invariant Checking**: A full structural self-check for tests and
//!   debugging
//!
//! ## Quick Start
//!
//! ```rust
//! use radixset::{RadixTree, io::VecSink};
//!
//! # fn main() -> radixset::Result<()> {
//! let mut tree = RadixTree::new();
//! tree.insert(b"AC")?;
//! tree.insert(b"ACGT")?;
//! tree.insert(b"AG")?;
//!
//! assert!(tree.contains(b"ACGT"));
//! assert_eq!(tree.len(), 3);
//!
//! tree.remove(b"AC")?;
//! assert_eq!(tree.len(), 2);
//!
//! // Sorted listing, regardless of insertion order.
//! let mut sink = VecSink::new();
//! tree.report_strings(&mut sink, None)?;
//! assert_eq!(sink.records(), &["ACGT".to_string(), "AG".to_string()]);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod algorithms;
pub mod config;
pub mod error;
pub mod io;
pub mod trie;

pub use config::{RadixTreeConfig, DEFAULT_MAX_KEY_LEN};
pub use error::{RadixSetError, Result};
pub use io::{FileSink, ReportSink, VecSink, WriterSink};
pub use trie::{KeyIter, RadixTree, TrieStats};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing radixset v{}", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_functionality() {
        init();
        let mut tree = RadixTree::new();
        tree.insert(b"hello").unwrap();
        assert!(tree.contains(b"hello"));
    }

    #[test]
    fn test_version_info() {
        assert!(VERSION.len() > 0);
        assert!(VERSION.contains('.'));
        let parts: Vec<&str> = VERSION.split('.').collect();
        assert!(parts.len() >= 2);
    }
}

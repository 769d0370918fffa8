//! Algorithm utilities used by the trie's reporting layer.

mod heap_sort;

pub use heap_sort::{heap_sort, heap_sort_by};

//! Configuration for [`RadixTree`](crate::RadixTree) construction.

use crate::error::{RadixSetError, Result};

/// Default maximum accepted key length in bytes.
///
/// Insert recursion depth is bounded by the key length, so the limit doubles
/// as a stack-depth guard. 4 KiB covers every realistic identifier or
/// sequence fragment while keeping worst-case recursion shallow.
pub const DEFAULT_MAX_KEY_LEN: usize = 4096;

/// Tuning knobs for a radix tree instance.
///
/// The defaults are safe for general use; `initial_capacity` is worth setting
/// when the approximate number of keys is known up front, since it pre-sizes
/// the node arena and avoids regrowth during bulk insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RadixTreeConfig {
    /// Node arena slots reserved at construction time.
    pub initial_capacity: usize,
    /// Maximum accepted key length in bytes; longer keys are rejected by
    /// insert and treated as absent by lookup and removal.
    pub max_key_len: usize,
}

impl Default for RadixTreeConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            max_key_len: DEFAULT_MAX_KEY_LEN,
        }
    }
}

impl RadixTreeConfig {
    /// Validate the configuration for correctness and consistency.
    pub fn validate(&self) -> Result<()> {
        if self.max_key_len == 0 {
            return Err(RadixSetError::configuration(
                "max_key_len must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = RadixTreeConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_key_len, DEFAULT_MAX_KEY_LEN);
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn test_zero_max_key_len_rejected() {
        let config = RadixTreeConfig {
            max_key_len: 0,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_custom_capacity_is_valid() {
        let config = RadixTreeConfig {
            initial_capacity: 1024,
            max_key_len: 64,
        };
        assert!(config.validate().is_ok());
    }
}

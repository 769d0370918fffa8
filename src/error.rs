//! Error handling for the radixset library
//!
//! A single error enum covers the whole crate: key validation at the API
//! boundary, configuration validation, sink I/O, and structural corruption
//! reported by the invariant checker. Absent keys are never errors — lookups
//! and removals signal absence through their boolean results.

use thiserror::Error;

/// Main error type for the radixset library
#[derive(Error, Debug)]
pub enum RadixSetError {
    /// I/O related errors (report sinks only; the trie itself performs no I/O)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Insert of a zero-length key; every edge label must hold at least one byte
    #[error("empty keys cannot be stored")]
    EmptyKey,

    /// Key longer than the configured maximum
    #[error("key too long: {len} bytes, maximum {max}")]
    KeyTooLong {
        /// Length of the rejected key
        len: usize,
        /// Configured maximum key length
        max: usize,
    },

    /// Configuration or parameter errors
    #[error("Invalid configuration: {message}")]
    Configuration {
        /// Configuration error message
        message: String,
    },

    /// Structural invariant violation found by the invariant checker
    #[error("Structural corruption: {message}")]
    Corruption {
        /// Description of the violated invariant
        message: String,
    },
}

impl RadixSetError {
    /// Create a key-too-long error
    pub fn key_too_long(len: usize, max: usize) -> Self {
        Self::KeyTooLong { len, max }
    }

    /// Create a configuration error
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration { message: message.into() }
    }

    /// Create a corruption error
    pub fn corruption<S: Into<String>>(message: S) -> Self {
        Self::Corruption { message: message.into() }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Io(_) => true,
            Self::EmptyKey => false,
            Self::KeyTooLong { .. } => false,
            Self::Configuration { .. } => false,
            Self::Corruption { .. } => false,
        }
    }

    /// Get the error category for logging/metrics
    pub fn category(&self) -> &'static str {
        match self {
            Self::Io(_) => "io",
            Self::EmptyKey => "key",
            Self::KeyTooLong { .. } => "key",
            Self::Configuration { .. } => "config",
            Self::Corruption { .. } => "corruption",
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, RadixSetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = RadixSetError::key_too_long(5000, 4096);
        assert_eq!(err.category(), "key");
        assert!(!err.is_recoverable());

        let err = RadixSetError::configuration("max_key_len must be at least 1");
        assert_eq!(err.category(), "config");
        assert!(!err.is_recoverable());

        let err = RadixSetError::corruption("sibling labels share a prefix");
        assert_eq!(err.category(), "corruption");
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = RadixSetError::EmptyKey;
        let display = format!("{}", err);
        assert!(display.contains("empty"));

        let err = RadixSetError::key_too_long(8192, 4096);
        let display = format!("{}", err);
        assert!(display.contains("8192"));
        assert!(display.contains("4096"));

        let err = RadixSetError::corruption("uncombined single-child chain");
        let display = format!("{}", err);
        assert!(display.contains("Structural corruption"));
        assert!(display.contains("single-child"));
    }

    #[test]
    fn test_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err: RadixSetError = io_error.into();

        assert_eq!(err.category(), "io");
        assert!(err.is_recoverable());

        let display = format!("{}", err);
        assert!(display.contains("I/O error"));
    }

    #[test]
    fn test_error_debug() {
        let err = RadixSetError::key_too_long(10, 4);
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("KeyTooLong"));
    }

    #[test]
    fn test_recoverability_split() {
        let io_err = RadixSetError::Io(std::io::Error::new(std::io::ErrorKind::Interrupted, "test"));
        assert!(io_err.is_recoverable());

        assert!(!RadixSetError::EmptyKey.is_recoverable());
        assert!(!RadixSetError::key_too_long(2, 1).is_recoverable());
        assert!(!RadixSetError::configuration("test").is_recoverable());
        assert!(!RadixSetError::corruption("test").is_recoverable());
    }
}

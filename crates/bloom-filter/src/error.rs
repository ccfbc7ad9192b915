//! Error types for the Bloom filter core

use thiserror::Error;

/// Errors that can occur while building or operating a Bloom filter
///
/// `InvalidExpectedItems`, `InvalidFPR` and `FilterTooLarge` are
/// configuration errors: they are raised before any bit storage is
/// allocated. `IndexOutOfRange` is raised by [`crate::BitArray`] when an
/// index falls outside the array.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FilterError {
    #[error("Expected item count must be greater than 0, got {count}")]
    InvalidExpectedItems { count: usize },

    #[error("Invalid false positive rate: {fpr} (must be strictly between 0 and 1)")]
    InvalidFPR { fpr: f64 },

    #[error("Filter size exceeds maximum: {size} > {max}")]
    FilterTooLarge { size: f64, max: usize },

    #[error("Bit index out of range: {index} >= {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Incompatible filters: {0}")]
    IncompatibleFilters(String),
}

impl FilterError {
    /// Whether this error was raised by parameter validation at construction time
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            FilterError::InvalidExpectedItems { .. }
                | FilterError::InvalidFPR { .. }
                | FilterError::FilterTooLarge { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_errors_are_classified() {
        assert!(FilterError::InvalidExpectedItems { count: 0 }.is_configuration_error());
        assert!(FilterError::InvalidFPR { fpr: 1.5 }.is_configuration_error());
        assert!(FilterError::FilterTooLarge {
            size: 1e30,
            max: 10
        }
        .is_configuration_error());
        assert!(!FilterError::IndexOutOfRange { index: 9, len: 8 }.is_configuration_error());
    }

    #[test]
    fn test_error_messages() {
        let err = FilterError::IndexOutOfRange { index: 9, len: 8 };
        assert_eq!(err.to_string(), "Bit index out of range: 9 >= 8");

        let err = FilterError::InvalidExpectedItems { count: 0 };
        assert_eq!(
            err.to_string(),
            "Expected item count must be greater than 0, got 0"
        );
    }
}

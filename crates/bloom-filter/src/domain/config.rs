//! Bloom filter configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filter::{BloomFilter, FilterConfigBuilder};
//!
//! let config = FilterConfigBuilder::new()
//!     .expected_items(10_000)
//!     .false_positive_rate(0.001)
//!     .build()
//!     .expect("valid config");
//!
//! let filter = BloomFilter::from_config(&config).expect("valid config");
//! assert_eq!(filter.size_bits(), 143_776);
//! ```

use crate::error::FilterError;

/// False positive rate used when none is given (one in ten million)
pub const DEFAULT_FALSE_POSITIVE_RATE: f64 = 1e-7;

/// Expected item count used when none is given
pub const DEFAULT_EXPECTED_ITEMS: usize = 1000;

/// Bloom filter configuration
#[derive(Clone, Debug, PartialEq)]
pub struct FilterConfig {
    /// Number of distinct items the filter is sized for (n > 0)
    pub expected_items: usize,
    /// Target false positive rate, strictly between 0 and 1
    pub false_positive_rate: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            expected_items: DEFAULT_EXPECTED_ITEMS,
            false_positive_rate: DEFAULT_FALSE_POSITIVE_RATE,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self, FilterError> {
        let config = Self {
            expected_items,
            false_positive_rate,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.expected_items == 0 {
            return Err(FilterError::InvalidExpectedItems {
                count: self.expected_items,
            });
        }

        if !(self.false_positive_rate > 0.0 && self.false_positive_rate < 1.0) {
            return Err(FilterError::InvalidFPR {
                fpr: self.false_positive_rate,
            });
        }

        Ok(())
    }

    /// Builder-style method to set expected items
    pub fn with_expected_items(mut self, expected_items: usize) -> Self {
        self.expected_items = expected_items;
        self
    }

    /// Builder-style method to set the false positive rate
    pub fn with_false_positive_rate(mut self, fpr: f64) -> Self {
        self.false_positive_rate = fpr;
        self
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    expected_items: Option<usize>,
    false_positive_rate: Option<f64>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of items the filter is sized for
    pub fn expected_items(mut self, count: usize) -> Self {
        self.expected_items = Some(count);
        self
    }

    /// Set the target false positive rate
    pub fn false_positive_rate(mut self, fpr: f64) -> Self {
        self.false_positive_rate = Some(fpr);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let defaults = FilterConfig::default();

        let config = FilterConfig {
            expected_items: self.expected_items.unwrap_or(defaults.expected_items),
            false_positive_rate: self
                .false_positive_rate
                .unwrap_or(defaults.false_positive_rate),
        };

        config.validate()?;
        Ok(config)
    }
}

//! # Bloom Filter
//!
//! Probabilistic set membership: "definitely absent" or "possibly present"
//! in sublinear memory, at a tunable false positive rate.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `BitArray`: Word-packed monotonic bit storage
//!   - `parameters`: Sizing of `m` (bits) and `k` (hash functions)
//!   - `HashFamily`: Seeded deterministic hashes (`Murmur3`, `PinnedSipHash`)
//!   - `BloomFilter`: Composes the above
//!   - `FilterConfig`: Configuration with validation
//!
//! - **Metrics** (`metrics.rs`): Operation counters for callers that want them
//!
//! ## Invariants
//!
//! - **No false negatives**: if added, `contains()` MUST return true
//! - `m` and `k` never change after construction
//! - Bits are never cleared
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filter::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 1e-7)?;
//! filter.add("a@example.com");
//!
//! assert!(filter.contains("a@example.com"));
//! assert!(!filter.contains("definitely-not-added@example.com"));
//! # Ok::<(), bloom_filter::FilterError>(())
//! ```

pub mod domain;
pub mod error;
pub mod metrics;

// Re-exports for convenience
pub use domain::{
    BitArray, BloomFilter, FilterConfig, FilterConfigBuilder, FilterParams, HashFamily, Murmur3,
    PinnedSipHash,
};
pub use error::FilterError;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};

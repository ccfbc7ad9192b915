//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Word-packed bit storage
//! - Parameter calculations
//! - Hash families
//! - Core Bloom filter implementation
//! - Configuration
//!
//! RULES:
//! - No I/O operations
//! - Pure functions where possible

pub mod bit_array;
pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;

pub use bit_array::{BitArray, WORD_BITS};
pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder, DEFAULT_FALSE_POSITIVE_RATE};
pub use hash_functions::{HashFamily, Murmur3, PinnedSipHash};
pub use parameters::{
    calculate_fpr, calculate_optimal_parameters, canonical_bit_count, optimal_bit_count,
    optimal_hash_count, FilterParams, MAX_SIZE_BITS,
};

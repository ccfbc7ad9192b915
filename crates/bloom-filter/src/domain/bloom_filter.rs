//! Core Bloom Filter implementation
//!
//! INVARIANTS:
//! - No false negatives: once `add(x)` returns, `contains(x)` is true for the
//!   lifetime of the filter
//! - `m` and `k` are fixed at construction
//! - Bits are only ever set

use tracing::debug;

use super::bit_array::BitArray;
use super::config::FilterConfig;
use super::hash_functions::{hash_positions, HashFamily, Murmur3};
use super::parameters::{calculate_fpr, calculate_optimal_parameters};
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// `add` takes `&mut self` and `contains` takes `&self`, so any number of
/// readers may share a filter while nobody is adding to it. Wrap it in a
/// `RwLock` to interleave writers and readers across threads.
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilter<H = Murmur3> {
    /// Bit array storing the filter state
    bits: BitArray,
    /// Number of hash functions (k)
    k: usize,
    /// Size in bits (m)
    m: usize,
    /// Number of `add` calls (n)
    n: usize,
    hasher: H,
}

impl BloomFilter {
    /// Create a filter sized for `expected_items` at `false_positive_rate`
    ///
    /// Uses [`Murmur3`] seeded with `0..k`.
    ///
    /// # Errors
    /// Returns a configuration error if `expected_items` is 0, if the rate
    /// is not strictly between 0 and 1, or if the resulting filter would be
    /// too large to allocate.
    pub fn new(expected_items: usize, false_positive_rate: f64) -> Result<Self, FilterError> {
        Self::with_hasher(expected_items, false_positive_rate, Murmur3)
    }

    /// Create a filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        Self::new(config.expected_items, config.false_positive_rate)
    }
}

impl<H: HashFamily> BloomFilter<H> {
    /// Create a filter that selects bits with `hasher`
    pub fn with_hasher(
        expected_items: usize,
        false_positive_rate: f64,
        hasher: H,
    ) -> Result<Self, FilterError> {
        let params = calculate_optimal_parameters(expected_items, false_positive_rate)?;

        debug!(
            expected_items,
            false_positive_rate,
            size_bits = params.size_bits,
            hash_count = params.hash_count,
            expected_fpr = params.expected_fpr,
            "Created bloom filter"
        );

        Ok(Self {
            bits: BitArray::new(params.size_bits),
            k: params.hash_count,
            m: params.size_bits,
            n: 0,
            hasher,
        })
    }

    /// Insert an element into the filter
    ///
    /// After insertion, `contains(element)` is guaranteed to return true.
    /// Adding the same element twice leaves the bits unchanged.
    ///
    /// # Panics
    /// Panics if a hash position falls outside the bit array, which the
    /// `mod m` reduction rules out.
    pub fn add<T: AsRef<[u8]> + ?Sized>(&mut self, element: &T) {
        for pos in hash_positions(&self.hasher, element.as_ref(), self.k, self.m) {
            if let Err(err) = self.bits.set(pos) {
                panic!("bloom filter hash position escaped the bit array: {err}");
            }
        }
        self.n += 1;
    }

    /// Test if an element might be in the filter
    ///
    /// Returns:
    /// - `true` if the element might be in the set (could be false positive)
    /// - `false` if the element is definitely NOT in the set (never false negative)
    ///
    /// Stops at the first clear bit.
    pub fn contains<T: AsRef<[u8]> + ?Sized>(&self, element: &T) -> bool {
        for pos in hash_positions(&self.hasher, element.as_ref(), self.k, self.m) {
            match self.bits.test(pos) {
                Ok(true) => {}
                Ok(false) => return false,
                Err(err) => panic!("bloom filter hash position escaped the bit array: {err}"),
            }
        }
        true
    }

    /// The `k` bit positions selected for `element`
    pub fn positions<T: AsRef<[u8]> + ?Sized>(&self, element: &T) -> Vec<usize> {
        hash_positions(&self.hasher, element.as_ref(), self.k, self.m).collect()
    }

    /// Merge another filter into this one (OR operation)
    ///
    /// After merge, this filter will match all elements from both filters.
    /// Both filters must share `m` and `k`; they are assumed to use the same
    /// hash family, which `H` enforces at the type level.
    pub fn merge(&mut self, other: &BloomFilter<H>) -> Result<(), FilterError> {
        if self.m != other.m || self.k != other.k {
            return Err(FilterError::IncompatibleFilters(format!(
                "(m={}, k={}) vs (m={}, k={})",
                self.m, self.k, other.m, other.k
            )));
        }

        self.bits.union_with(&other.bits);
        self.n += other.n;
        Ok(())
    }

    /// Estimated false positive rate given the number of `add` calls so far
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_fpr(&self) -> f64 {
        calculate_fpr(self.m, self.n, self.k)
    }

    /// Fraction of bits currently set
    pub fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.m as f64
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Get the filter size in bits
    pub fn size_bits(&self) -> usize {
        self.m
    }

    /// Get the number of hash functions
    pub fn hash_count(&self) -> usize {
        self.k
    }

    /// Get the number of `add` calls, duplicates included
    pub fn items_added(&self) -> usize {
        self.n
    }

    /// Read-only view of the underlying bits
    pub fn bits(&self) -> &BitArray {
        &self.bits
    }

    pub fn hasher(&self) -> &H {
        &self.hasher
    }
}

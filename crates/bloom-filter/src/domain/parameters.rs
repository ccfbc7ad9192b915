//! Optimal Bloom filter parameter calculation
//!
//! Formulas:
//! - m = ceil((n * ln(fpr)) / ln(1 / 2^ln(2)))  -- bits
//! - k = floor((m/n) * ln(2)), at least 1       -- hash functions
//!
//! The bit count formula is a rearrangement of the textbook
//! `m = -n*ln(fpr) / (ln(2)^2)`. It is evaluated exactly as written above,
//! which is what [`optimal_bit_count`] returns; [`canonical_bit_count`] is
//! kept for comparison.

use std::f64::consts::LN_2;

use crate::error::FilterError;

/// Largest bit array the sizing functions will hand out (4 GiB of storage)
#[cfg(target_pointer_width = "64")]
pub const MAX_SIZE_BITS: usize = 1 << 35;

/// Largest bit array the sizing functions will hand out (the address space limit)
#[cfg(not(target_pointer_width = "64"))]
pub const MAX_SIZE_BITS: usize = usize::MAX >> 3;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct FilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Expected false positive rate once `n` items are inserted
    pub expected_fpr: f64,
}

/// Calculate the filter parameters for `expected_items` at `target_fpr`
pub fn calculate_optimal_parameters(
    expected_items: usize,
    target_fpr: f64,
) -> Result<FilterParams, FilterError> {
    let size_bits = optimal_bit_count(expected_items, target_fpr)?;
    let hash_count = optimal_hash_count(size_bits, expected_items)?;
    let expected_fpr = calculate_fpr(size_bits, expected_items, hash_count);

    Ok(FilterParams {
        size_bits,
        hash_count,
        expected_fpr,
    })
}

/// Number of bits needed to hold `expected_items` at `target_fpr`
pub fn optimal_bit_count(expected_items: usize, target_fpr: f64) -> Result<usize, FilterError> {
    validate_expected_items(expected_items)?;
    validate_fpr(target_fpr)?;

    let n = expected_items as f64;
    let m = ((n * target_fpr.ln()) / (1.0 / 2f64.powf(LN_2)).ln()).ceil();

    if !m.is_finite() || m > MAX_SIZE_BITS as f64 {
        return Err(FilterError::FilterTooLarge {
            size: m,
            max: MAX_SIZE_BITS,
        });
    }

    Ok((m as usize).max(1))
}

/// Number of hash functions for `size_bits` bits holding `expected_items`
///
/// Small `m/n` ratios would floor to zero, which turns the filter into one
/// that reports every item as present; the result is clamped to 1.
pub fn optimal_hash_count(size_bits: usize, expected_items: usize) -> Result<usize, FilterError> {
    validate_expected_items(expected_items)?;

    let k = ((size_bits as f64 / expected_items as f64) * LN_2).floor() as usize;
    Ok(k.max(1))
}

/// Textbook bit count `ceil(-n*ln(fpr) / ln(2)^2)`
pub fn canonical_bit_count(expected_items: usize, target_fpr: f64) -> Result<usize, FilterError> {
    validate_expected_items(expected_items)?;
    validate_fpr(target_fpr)?;

    let n = expected_items as f64;
    Ok((-n * target_fpr.ln() / (LN_2 * LN_2)).ceil() as usize)
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

fn validate_expected_items(expected_items: usize) -> Result<(), FilterError> {
    if expected_items == 0 {
        return Err(FilterError::InvalidExpectedItems {
            count: expected_items,
        });
    }
    Ok(())
}

// NaN fails both comparisons and is rejected too.
fn validate_fpr(fpr: f64) -> Result<(), FilterError> {
    if !(fpr > 0.0 && fpr < 1.0) {
        return Err(FilterError::InvalidFPR { fpr });
    }
    Ok(())
}

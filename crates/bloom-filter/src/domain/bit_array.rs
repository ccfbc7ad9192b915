//! Word-packed bit storage for the Bloom filter
//!
//! INVARIANTS:
//! - Storage is `ceil(len / 64)` `u64` words, zeroed at construction
//! - Bits are only ever set, never cleared
//! - Valid indices are `0..len`

use bitvec::prelude::*;

use crate::error::FilterError;

/// Width of one storage word in bits
pub const WORD_BITS: usize = u64::BITS as usize;

/// Fixed-size, monotonic bit array backed by `u64` words
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitArray {
    bits: BitVec<u64, Lsb0>,
}

impl BitArray {
    /// Allocate a bit array of `len` bits, all cleared
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![u64, Lsb0; 0; len],
        }
    }

    /// Set the bit at `index` to 1
    ///
    /// Setting an already-set bit is a no-op.
    pub fn set(&mut self, index: usize) -> Result<(), FilterError> {
        self.check_bounds(index)?;
        self.bits.set(index, true);
        Ok(())
    }

    /// Test whether the bit at `index` is set
    pub fn test(&self, index: usize) -> Result<bool, FilterError> {
        self.check_bounds(index)?;
        Ok(self.bits[index])
    }

    /// Number of addressable bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of bits currently set
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// The packed storage words
    ///
    /// Bits past `len` in the last word are always zero.
    pub fn as_words(&self) -> &[u64] {
        self.bits.as_raw_slice()
    }

    /// OR every word of `other` into this array
    ///
    /// Callers must ensure both arrays have the same length.
    pub(crate) fn union_with(&mut self, other: &BitArray) {
        debug_assert_eq!(self.len(), other.len());
        let self_raw = self.bits.as_raw_mut_slice();
        let other_raw = other.bits.as_raw_slice();
        for (s, o) in self_raw.iter_mut().zip(other_raw.iter()) {
            *s |= *o;
        }
    }

    fn check_bounds(&self, index: usize) -> Result<(), FilterError> {
        if index >= self.bits.len() {
            return Err(FilterError::IndexOutOfRange {
                index,
                len: self.bits.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_allocates_enough_zeroed_words() {
        for len in [1usize, 63, 64, 65, 128, 1000] {
            let bits = BitArray::new(len);
            assert_eq!(bits.len(), len);
            assert_eq!(
                bits.as_words().len(),
                len.div_ceil(WORD_BITS),
                "len={} should use ceil(len/64) words",
                len
            );
            assert!(bits.as_words().iter().all(|w| *w == 0), "All words start cleared");
            assert_eq!(bits.count_ones(), 0);
        }
    }

    #[test]
    fn test_set_then_test() {
        let mut bits = BitArray::new(100);
        bits.set(0).unwrap();
        bits.set(63).unwrap();
        bits.set(64).unwrap();
        bits.set(99).unwrap();

        for index in [0, 63, 64, 99] {
            assert!(bits.test(index).unwrap(), "Bit {} should be set", index);
        }
        assert!(!bits.test(1).unwrap());
        assert!(!bits.test(65).unwrap());
        assert_eq!(bits.count_ones(), 4);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut bits = BitArray::new(10);
        bits.set(3).unwrap();
        let before = bits.clone();
        bits.set(3).unwrap();
        assert_eq!(bits, before, "Setting a set bit must not change the array");
        assert_eq!(bits.count_ones(), 1);
    }

    #[test]
    fn test_word_layout_is_lsb_first() {
        let mut bits = BitArray::new(130);
        bits.set(0).unwrap();
        bits.set(65).unwrap();
        bits.set(129).unwrap();

        assert_eq!(bits.as_words(), &[1u64, 1u64 << 1, 1u64 << 1]);
    }

    #[test]
    fn test_out_of_range_index_is_rejected() {
        let mut bits = BitArray::new(8);

        assert_eq!(
            bits.set(8),
            Err(FilterError::IndexOutOfRange { index: 8, len: 8 })
        );
        assert_eq!(
            bits.test(usize::MAX),
            Err(FilterError::IndexOutOfRange {
                index: usize::MAX,
                len: 8
            })
        );
        assert_eq!(bits.count_ones(), 0, "A rejected set must not touch storage");
    }

    #[test]
    fn test_union_with() {
        let mut a = BitArray::new(70);
        let mut b = BitArray::new(70);
        a.set(1).unwrap();
        b.set(2).unwrap();
        b.set(69).unwrap();

        a.union_with(&b);

        assert!(a.test(1).unwrap());
        assert!(a.test(2).unwrap());
        assert!(a.test(69).unwrap());
        assert_eq!(a.count_ones(), 3);
    }
}

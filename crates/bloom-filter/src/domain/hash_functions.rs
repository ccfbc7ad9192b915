//! Hash functions for Bloom filter
//!
//! Every member of a family is addressed by a seed index `0..k`. Outputs
//! depend only on `(item, seed_index)`: no per-process randomness, so a
//! filter built today selects the same bits as one built tomorrow.

use std::hash::Hasher;
use std::io::Cursor;

use siphasher::sip::SipHasher13;

/// A family of deterministic hash functions indexed by seed
pub trait HashFamily {
    /// Hash `item` with the family member selected by `seed_index`
    fn hash(&self, item: &[u8], seed_index: u32) -> u64;
}

/// MurmurHash3 (x86, 32-bit) with the seed index as the seed
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Murmur3;

impl HashFamily for Murmur3 {
    fn hash(&self, item: &[u8], seed_index: u32) -> u64 {
        murmur_hash(item, seed_index) as u64
    }
}

/// SipHash-1-3 under a fixed key, over `seed_index` in decimal followed by the item
///
/// The key never changes between runs, unlike `std`'s `RandomState`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PinnedSipHash;

const SIP_KEY_0: u64 = 0x0706_0504_0302_0100;
const SIP_KEY_1: u64 = 0x0f0e_0d0c_0b0a_0908;

impl HashFamily for PinnedSipHash {
    fn hash(&self, item: &[u8], seed_index: u32) -> u64 {
        let mut hasher = SipHasher13::new_with_keys(SIP_KEY_0, SIP_KEY_1);
        hasher.write(seed_index.to_string().as_bytes());
        hasher.write(item);
        hasher.finish()
    }
}

/// Hash an element with MurmurHash3 x86_32 using `seed`
pub fn murmur_hash(element: &[u8], seed: u32) -> u32 {
    let mut cursor = Cursor::new(element);

    // Reading from an in-memory cursor cannot fail
    murmur3::murmur3_32(&mut cursor, seed).unwrap_or(0)
}

/// The `k` bit positions selected for `element` in an `m`-bit array
///
/// Position `i` is `family.hash(element, i) mod m`.
pub fn hash_positions<'a, H: HashFamily>(
    family: &'a H,
    element: &'a [u8],
    k: usize,
    m: usize,
) -> impl Iterator<Item = usize> + 'a {
    (0..k as u32).map(move |seed| (family.hash(element, seed) % m as u64) as usize)
}

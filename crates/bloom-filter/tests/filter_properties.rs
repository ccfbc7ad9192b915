//! Property tests for the Bloom filter core

use std::collections::HashSet;

use bloom_filter::{BloomFilter, PinnedSipHash};
use proptest::collection::{hash_set, vec};
use proptest::prelude::*;
use rand::distributions::Alphanumeric;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

proptest! {
    #[test]
    fn no_false_negatives(items in vec(".{0,40}", 1..200), fpr in 0.0001f64..0.5) {
        let mut filter = BloomFilter::new(items.len(), fpr).unwrap();
        for item in &items {
            filter.add(item);
        }
        for item in &items {
            prop_assert!(filter.contains(item), "false negative for {:?}", item);
        }
    }

    #[test]
    fn add_is_idempotent(items in vec("[a-z0-9@.]{1,24}", 1..50), repeat in 0usize..50) {
        let mut filter = BloomFilter::new(items.len(), 0.01).unwrap();
        for item in &items {
            filter.add(item);
        }
        let before = filter.bits().clone();

        let again = &items[repeat % items.len()];
        filter.add(again);

        prop_assert_eq!(filter.bits(), &before);
    }

    #[test]
    fn identical_inputs_give_identical_bits(items in vec(any::<String>(), 1..100)) {
        let mut a = BloomFilter::new(items.len(), 0.001).unwrap();
        let mut b = BloomFilter::new(items.len(), 0.001).unwrap();
        for item in &items {
            a.add(item);
            b.add(item);
        }
        prop_assert_eq!(a.bits().as_words(), b.bits().as_words());
    }

    #[test]
    fn bits_only_accumulate(first in hash_set("[a-z]{1,12}", 1..30), later in vec("[A-Z]{1,12}", 0..60)) {
        let mut filter = BloomFilter::with_hasher(first.len(), 0.05, PinnedSipHash).unwrap();
        for item in &first {
            filter.add(item);
        }

        let mut previous = filter.bits().clone();
        for item in &later {
            filter.add(item);
            for (old, new) in previous.as_words().iter().zip(filter.bits().as_words()) {
                prop_assert_eq!(old & !new, 0, "a bit was cleared");
            }
            previous = filter.bits().clone();
        }

        for item in &first {
            prop_assert!(filter.contains(item));
        }
    }

    #[test]
    fn sizing_is_sane(n in 1usize..100_000, fpr in 1e-9f64..0.99) {
        let filter = BloomFilter::new(n, fpr).unwrap();
        prop_assert!(filter.size_bits() >= 1);
        prop_assert!(filter.hash_count() >= 1);
        prop_assert_eq!(filter.bits().as_words().len(), filter.size_bits().div_ceil(64));
    }
}

fn random_items(rng: &mut StdRng, count: usize, len: usize) -> HashSet<String> {
    let mut items = HashSet::with_capacity(count);
    while items.len() < count {
        let item: String = (0..len).map(|_| rng.sample(Alphanumeric) as char).collect();
        items.insert(item);
    }
    items
}

#[test]
fn empirical_false_positive_rate_tracks_target() {
    let mut rng = StdRng::seed_from_u64(0x5EED);

    for (n, target) in [(10_000, 0.01), (10_000, 0.001), (2_000, 0.05)] {
        let members = random_items(&mut rng, n, 16);
        let mut filter = BloomFilter::new(n, target).unwrap();
        for item in &members {
            filter.add(item);
        }

        let probes = 200_000;
        let mut false_positives = 0usize;
        let mut tested = 0usize;
        while tested < probes {
            let probe: String = (0..17).map(|_| rng.sample(Alphanumeric) as char).collect();
            tested += 1;
            if filter.contains(&probe) {
                false_positives += 1;
            }
        }

        let observed = false_positives as f64 / tested as f64;
        assert!(
            observed < target * 10.0 && observed > target / 10.0,
            "n={} target={} observed={}",
            n,
            target,
            observed
        );
    }
}

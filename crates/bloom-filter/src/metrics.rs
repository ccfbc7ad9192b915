//! Counters for filter construction, inserts and lookups
//!
//! The filter itself does not record anything; callers time their own
//! `add`/`contains` calls and report them to a [`MetricsRecorder`].
//!
//! ```
//! use std::time::Instant;
//! use bloom_filter::{BloomFilter, Metrics, MetricsRecorder};
//!
//! let metrics = Metrics::new();
//! let mut filter = BloomFilter::new(100, 0.01).unwrap();
//! metrics.record_filter_created(filter.size_bits(), filter.hash_count());
//!
//! let start = Instant::now();
//! filter.add("a@example.com");
//! metrics.record_insert(start.elapsed());
//!
//! let start = Instant::now();
//! let found = filter.contains("a@example.com");
//! metrics.record_lookup(start.elapsed(), found);
//!
//! assert_eq!(metrics.snapshot().lookups_positive, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Sink for filter operation measurements
///
/// Implement this trait to forward measurements to an external system.
pub trait MetricsRecorder: Send + Sync {
    /// Record construction of a filter with `size_bits` bits and `hash_count` hashes
    fn record_filter_created(&self, size_bits: usize, hash_count: usize);

    /// Record one `add` call
    fn record_insert(&self, duration: Duration);

    /// Record one `contains` call and its verdict
    fn record_lookup(&self, duration: Duration, found: bool);
}

/// Thread-safe counters backed by relaxed atomics
#[derive(Debug, Default)]
pub struct Metrics {
    filters_created: AtomicU64,
    bits_allocated: AtomicU64,
    hashes_per_item: AtomicU64,
    items_inserted: AtomicU64,
    insert_time_ns: AtomicU64,
    lookups_performed: AtomicU64,
    lookups_positive: AtomicU64,
    lookup_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        let items_inserted = self.items_inserted.load(Ordering::Relaxed);
        let lookups_performed = self.lookups_performed.load(Ordering::Relaxed);

        MetricsSnapshot {
            filters_created: self.filters_created.load(Ordering::Relaxed),
            bits_allocated: self.bits_allocated.load(Ordering::Relaxed),
            hashes_per_item: self.hashes_per_item.load(Ordering::Relaxed),
            items_inserted,
            lookups_performed,
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            avg_insert_ns: average(self.insert_time_ns.load(Ordering::Relaxed), items_inserted),
            avg_lookup_ns: average(
                self.lookup_time_ns.load(Ordering::Relaxed),
                lookups_performed,
            ),
        }
    }
}

impl MetricsRecorder for Metrics {
    fn record_filter_created(&self, size_bits: usize, hash_count: usize) {
        self.filters_created.fetch_add(1, Ordering::Relaxed);
        self.bits_allocated
            .fetch_add(size_bits as u64, Ordering::Relaxed);
        self.hashes_per_item
            .store(hash_count as u64, Ordering::Relaxed);
    }

    fn record_insert(&self, duration: Duration) {
        self.items_inserted.fetch_add(1, Ordering::Relaxed);
        self.insert_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    fn record_lookup(&self, duration: Duration, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Debug, Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_filter_created(&self, _: usize, _: usize) {}
    fn record_insert(&self, _: Duration) {}
    fn record_lookup(&self, _: Duration, _: bool) {}
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MetricsSnapshot {
    pub filters_created: u64,
    pub bits_allocated: u64,
    /// `k` of the most recently created filter
    pub hashes_per_item: u64,
    pub items_inserted: u64,
    pub lookups_performed: u64,
    pub lookups_positive: u64,
    pub avg_insert_ns: u64,
    pub avg_lookup_ns: u64,
}

impl MetricsSnapshot {
    /// Share of lookups answered "possibly present"
    ///
    /// Includes true positives as well as false positives.
    pub fn positive_rate(&self) -> f64 {
        if self.lookups_performed == 0 {
            return 0.0;
        }
        self.lookups_positive as f64 / self.lookups_performed as f64
    }
}

fn average(total: u64, count: u64) -> u64 {
    if count > 0 {
        total / count
    } else {
        0
    }
}

//! Build-then-check orchestration
//!
//! 1. Read every item from the build source
//! 2. Size a filter for that many items at the configured rate
//! 3. Add every item
//! 4. Check each item of the check source as it is read and hand the
//!    verdict to the sink

use std::time::Instant;

use bloom_filter::{BloomFilter, FilterConfigBuilder, MetricsRecorder};
use tracing::info;

use crate::error::CheckError;
use crate::ports::{ItemSource, Verdict, VerdictSink};

/// Outcome of one run
#[derive(Clone, Debug, PartialEq)]
pub struct CheckSummary {
    pub items_added: usize,
    pub items_checked: usize,
    pub probably_present: usize,
    pub size_bits: usize,
    pub hash_count: usize,
}

/// Build a filter holding every item of `source`
///
/// The filter is sized for the number of items read, duplicates included.
/// An empty source is a configuration error.
pub fn build_filter<S: ItemSource + ?Sized>(
    source: &mut S,
    false_positive_rate: f64,
    metrics: &dyn MetricsRecorder,
) -> Result<BloomFilter, CheckError> {
    let items = source.read_items()?;

    let config = FilterConfigBuilder::new()
        .expected_items(items.len())
        .false_positive_rate(false_positive_rate)
        .build()?;
    let mut filter = BloomFilter::from_config(&config)?;
    metrics.record_filter_created(filter.size_bits(), filter.hash_count());

    for item in &items {
        let start = Instant::now();
        filter.add(item);
        metrics.record_insert(start.elapsed());
    }

    info!(
        items = items.len(),
        size_bits = filter.size_bits(),
        hash_count = filter.hash_count(),
        bits_set = filter.bits_set(),
        estimated_fpr = filter.estimated_fpr(),
        "Filter built"
    );
    Ok(filter)
}

/// Check every item of `source` against `filter`, in order
///
/// Items are pulled one at a time, so each verdict reaches the sink before
/// the next item is read.
pub fn check_items<S, K>(
    filter: &BloomFilter,
    source: &mut S,
    sink: &mut K,
    metrics: &dyn MetricsRecorder,
) -> Result<(usize, usize), CheckError>
where
    S: ItemSource + ?Sized,
    K: VerdictSink + ?Sized,
{
    let mut checked = 0;
    let mut positives = 0;

    while let Some(item) = source.next_item()? {
        let start = Instant::now();
        let found = filter.contains(&item);
        metrics.record_lookup(start.elapsed(), found);

        checked += 1;
        if found {
            positives += 1;
        }
        sink.record(&item, Verdict::from(found))?;
    }
    sink.finish()?;

    Ok((checked, positives))
}

/// Build a filter from `build_source` and check `check_source` against it
pub fn run<B, C, K>(
    build_source: &mut B,
    check_source: &mut C,
    sink: &mut K,
    false_positive_rate: f64,
    metrics: &dyn MetricsRecorder,
) -> Result<CheckSummary, CheckError>
where
    B: ItemSource + ?Sized,
    C: ItemSource + ?Sized,
    K: VerdictSink + ?Sized,
{
    let filter = build_filter(build_source, false_positive_rate, metrics)?;
    let (items_checked, probably_present) = check_items(&filter, check_source, sink, metrics)?;

    let summary = CheckSummary {
        items_added: filter.items_added(),
        items_checked,
        probably_present,
        size_bits: filter.size_bits(),
        hash_count: filter.hash_count(),
    };
    info!(
        checked = summary.items_checked,
        probably_present = summary.probably_present,
        "Check finished"
    );
    Ok(summary)
}

//! Interval-to-monthly expansion.
//!
//! Takes a batch of interval records and produces one row per
//! (record, month bucket) pair. The bucket range is a property of the batch:
//! it runs from the calendar month of the earliest `start_date` to the month
//! of the latest `end_date`, and is recomputed per call so results stay
//! reproducible without a live data source.

use crate::core::domain::{ExpandedRow, IntervalRecord, MonthBucket};
use crate::time::month::month_range;

/// Month buckets spanning the batch, earliest `start_date` through latest
/// `end_date`. Empty for an empty batch.
pub fn bucket_range(records: &[IntervalRecord]) -> Vec<MonthBucket> {
    let min_start = records.iter().map(|r| r.start_date).min();
    let max_end = records.iter().map(|r| r.end_date).max();

    match (min_start, max_end) {
        (Some(min), Some(max)) => month_range(min, max),
        _ => Vec::new(),
    }
}

/// Cross every record with every bucket.
///
/// `effective_capacity` is the record's capacity for months the interval
/// overlaps and 0.0 elsewhere; callers that only care about active
/// allocation filter the zero rows out afterwards. `projected_capacity`
/// starts at 0.0 and is filled in by [`projection`](super::projection).
///
/// Output size is `records.len() * buckets.len()`.
pub fn expand(records: &[IntervalRecord], buckets: &[MonthBucket]) -> Vec<ExpandedRow> {
    let mut rows = Vec::with_capacity(records.len() * buckets.len());

    for record in records {
        for bucket in buckets {
            let effective_capacity = if record.overlaps(bucket) {
                record.capacity
            } else {
                0.0
            };
            rows.push(ExpandedRow {
                record: record.clone(),
                bucket: *bucket,
                effective_capacity,
                projected_capacity: 0.0,
            });
        }
    }

    rows
}

/// Expand a batch against its own bucket range.
pub fn expand_batch(records: &[IntervalRecord]) -> Vec<ExpandedRow> {
    let buckets = bucket_range(records);
    expand(records, &buckets)
}

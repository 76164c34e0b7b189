//! Capacity aggregation per (grouping key, month).

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::core::domain::ExpandedRow;

/// Summed measure per `(grouping key, month_end)`.
///
/// A `BTreeMap` keeps iteration order deterministic for downstream tables.
pub type CapacityByMonth = BTreeMap<(String, NaiveDate), f64>;

/// Sum `measure` over all rows sharing a grouping key and month.
///
/// Rows whose key function returns `None` (e.g. a log without an explorer
/// link) are skipped. Groups with no contributing rows are absent from the
/// result rather than materialized as zero; the gap calculator fills the
/// missing pairs explicitly. Pure summation, so the result is independent
/// of input row order.
pub fn aggregate<K, M>(rows: &[ExpandedRow], key_fn: K, measure_fn: M) -> CapacityByMonth
where
    K: Fn(&ExpandedRow) -> Option<String>,
    M: Fn(&ExpandedRow) -> f64,
{
    let mut totals = CapacityByMonth::new();

    for row in rows {
        if let Some(key) = key_fn(row) {
            *totals.entry((key, row.bucket.month_end)).or_insert(0.0) += measure_fn(row);
        }
    }

    totals
}

/// Required capacity per (requirement id, month) from expanded requirement
/// rows. Every requirement record is its own grouping key.
pub fn aggregate_required(rows: &[ExpandedRow]) -> CapacityByMonth {
    aggregate(rows, |r| Some(r.record.id.clone()), |r| r.effective_capacity)
}

/// Allocated capacity per (requirement id, month) from expanded log rows,
/// grouped by the requirement each log fulfils. Logs with no requirement
/// link contribute nothing.
pub fn aggregate_allocations_by_requirement(rows: &[ExpandedRow]) -> CapacityByMonth {
    aggregate(
        rows,
        |r| r.record.requirement.first().map(str::to_string),
        |r| r.effective_capacity,
    )
}

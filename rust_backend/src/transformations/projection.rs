//! Probability-weighted capacity projection.
//!
//! For months up to the record's nominal end date, the projected series is
//! the effective capacity weighted by the scenario probability; past the
//! nominal end it switches to the renewal weighting. Both branches weight
//! the coverage-zeroed effective capacity: the source applied renewal to the
//! un-zeroed nominal capacity, which let records project headcount in months
//! they were not active at all. That asymmetry is deliberately not kept.

use crate::core::domain::ExpandedRow;

/// Fill `projected_capacity` for every row.
///
/// Rows at or before the projection cutoff (nominal end date, falling back
/// to the record's own end date) get `effective_capacity * probability`;
/// later rows get `effective_capacity * renewal`. Missing probability and
/// renewal have already normalized to 0.0.
pub fn project(mut rows: Vec<ExpandedRow>) -> Vec<ExpandedRow> {
    for row in &mut rows {
        let weight = if row.bucket.month_end <= row.record.projection_cutoff() {
            row.record.probability
        } else {
            row.record.renewal
        };
        row.projected_capacity = row.effective_capacity * weight;
    }
    rows
}

//! Staffing gap computation: required minus allocated capacity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregation::CapacityByMonth;

/// Shortfall (positive) or over-allocation (negative) for one requirement
/// in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapRow {
    pub requirement_id: String,
    pub month_end: NaiveDate,
    pub required_capacity: f64,
    pub allocated_capacity: f64,
    pub gap: f64,
}

/// Join required capacity against allocated capacity per
/// (requirement id, month).
///
/// Outer-join semantics on the required side: every pair in `required`
/// yields a row, with allocation defaulting to 0 when nothing matches.
/// Pairs that exist only in `allocated` produce no row, so allocation
/// against a since-removed requirement is invisible here. Zero-gap rows are
/// returned; dropping them for display is a presentation concern.
pub fn compute_gaps(required: &CapacityByMonth, allocated: &CapacityByMonth) -> Vec<GapRow> {
    required
        .iter()
        .map(|((requirement_id, month_end), required_capacity)| {
            let allocated_capacity = allocated
                .get(&(requirement_id.clone(), *month_end))
                .copied()
                .unwrap_or(0.0);
            GapRow {
                requirement_id: requirement_id.clone(),
                month_end: *month_end,
                required_capacity: *required_capacity,
                allocated_capacity,
                gap: required_capacity - allocated_capacity,
            }
        })
        .collect()
}

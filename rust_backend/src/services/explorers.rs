//! Per-explorer monthly utilization.

use std::collections::{BTreeSet, HashMap};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::domain::{ExpandedRow, ExplorerInfo};
use crate::transformations::aggregation::aggregate;
use crate::transformations::filtering::TableRow;

/// Allocation total and availability for one explorer in one month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerUtilizationRow {
    pub explorer_id: String,
    pub explorer_name: Option<String>,
    pub role_name: Option<String>,
    pub belt_colour: Option<String>,
    pub active: bool,
    pub month_end: NaiveDate,
    pub allocated_capacity: f64,
    /// Headroom relative to one full-time allocation: negative when the
    /// explorer is over-allocated. Always 0 for inactive explorers.
    pub availability: f64,
}

impl TableRow for ExplorerUtilizationRow {
    fn month_end(&self) -> NaiveDate {
        self.month_end
    }

    fn has_column(name: &str) -> bool {
        matches!(name, "role" | "explorer" | "belt_colour")
    }

    fn column(&self, name: &str) -> Option<&str> {
        match name {
            "role" => self.role_name.as_deref(),
            "explorer" => self.explorer_name.as_deref(),
            "belt_colour" => self.belt_colour.as_deref(),
            _ => None,
        }
    }
}

/// Sum allocated capacity per (explorer, month) over the active log rows
/// and join the roster in.
///
/// Roster-driven: every roster explorer gets one row per month of the log
/// grid, with allocation defaulting to 0, so unallocated people stay
/// visible in the availability view. Allocations against ids missing from
/// the roster still appear (their allocation is real) with roster fields
/// empty and treated as inactive.
pub fn explorer_utilization(
    log_rows: &[ExpandedRow],
    roster: &[ExplorerInfo],
) -> Vec<ExplorerUtilizationRow> {
    let totals = aggregate(
        log_rows,
        |row| {
            if row.is_active() {
                row.record.explorer.first().map(str::to_string)
            } else {
                None
            }
        },
        |row| row.effective_capacity,
    );

    let months: BTreeSet<NaiveDate> = log_rows.iter().map(|r| r.bucket.month_end).collect();
    let by_id: HashMap<&str, &ExplorerInfo> = roster.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut rows = Vec::with_capacity(roster.len() * months.len());
    for info in roster {
        for &month_end in &months {
            let allocated_capacity = totals
                .get(&(info.id.clone(), month_end))
                .copied()
                .unwrap_or(0.0);
            rows.push(utilization_row(
                info.id.clone(),
                Some(info),
                month_end,
                allocated_capacity,
            ));
        }
    }

    for ((explorer_id, month_end), allocated_capacity) in totals {
        if !by_id.contains_key(explorer_id.as_str()) {
            rows.push(utilization_row(explorer_id, None, month_end, allocated_capacity));
        }
    }

    rows
}

fn utilization_row(
    explorer_id: String,
    info: Option<&ExplorerInfo>,
    month_end: NaiveDate,
    allocated_capacity: f64,
) -> ExplorerUtilizationRow {
    let active = info.map(|e| e.active).unwrap_or(false);
    let availability = if active {
        allocated_capacity - 1.0
    } else {
        0.0
    };
    ExplorerUtilizationRow {
        explorer_id,
        explorer_name: info.and_then(|e| e.name.clone()),
        role_name: info.and_then(|e| e.role_name.clone()),
        belt_colour: info.and_then(|e| e.belt_colour.clone()),
        active,
        month_end,
        allocated_capacity,
        availability,
    }
}

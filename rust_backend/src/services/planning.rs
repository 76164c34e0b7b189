//! The enrich pipeline: raw interval records to presentation-ready tables.

use std::collections::HashMap;

use chrono::NaiveDate;
use log::info;
use serde::{Deserialize, Serialize};

use crate::core::domain::{ExpandedRow, ExplorerInfo, IntervalRecord};
use crate::services::explorers::{explorer_utilization, ExplorerUtilizationRow};
use crate::transformations::aggregation::{
    aggregate_allocations_by_requirement, aggregate_required, CapacityByMonth,
};
use crate::transformations::expansion::expand_batch;
use crate::transformations::filtering::TableRow;
use crate::transformations::gaps::compute_gaps;
use crate::transformations::projection::project;

/// One gap row joined back to its requirement's display attributes, so the
/// gaps table can be filtered and grouped like any other monthly table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapDetailRow {
    pub requirement_id: String,
    pub month_end: NaiveDate,
    pub mission_name: Option<String>,
    pub role_name: Option<String>,
    pub client_name: Option<String>,
    pub scenario_name: Option<String>,
    pub seniority: Option<String>,
    pub probability: f64,
    pub required_capacity: f64,
    pub allocated_capacity: f64,
    pub gap: f64,
}

impl GapDetailRow {
    /// Gap weighted by the requirement's scenario probability.
    pub fn weighted_gap(&self) -> f64 {
        self.gap * self.probability
    }
}

impl TableRow for GapDetailRow {
    fn month_end(&self) -> NaiveDate {
        self.month_end
    }

    fn has_column(name: &str) -> bool {
        matches!(
            name,
            "role" | "client" | "mission" | "scenario" | "seniority"
        )
    }

    fn column(&self, name: &str) -> Option<&str> {
        match name {
            "role" => self.role_name.as_deref(),
            "client" => self.client_name.as_deref(),
            "mission" => self.mission_name.as_deref(),
            "scenario" => self.scenario_name.as_deref(),
            "seniority" => self.seniority.as_deref(),
            _ => None,
        }
    }
}

/// Everything the dashboard renders, derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningTables {
    /// Requirement x month rows with the projected capacity series filled in.
    pub requirements: Vec<ExpandedRow>,
    /// Mission-log x month rows (supply side).
    pub mission_logs: Vec<ExpandedRow>,
    /// Allocated capacity summed per (requirement, month).
    pub logs_by_requirement: CapacityByMonth,
    /// Required vs allocated per (requirement, month).
    pub gaps: Vec<GapDetailRow>,
    /// Allocation totals and availability per (explorer, month).
    pub explorer_utilization: Vec<ExplorerUtilizationRow>,
}

/// Run the full pipeline over one normalized snapshot.
///
/// Pure with respect to its inputs: requirements and logs are expanded
/// against their own batch ranges, so the result is reproducible for a
/// given snapshot without a live data source.
pub fn enrich(
    requirements: &[IntervalRecord],
    logs: &[IntervalRecord],
    explorers: &[ExplorerInfo],
) -> PlanningTables {
    info!(
        "enriching snapshot: {} requirements, {} logs, {} explorers",
        requirements.len(),
        logs.len(),
        explorers.len()
    );

    let requirement_rows = project(expand_batch(requirements));
    let log_rows = expand_batch(logs);

    let required = aggregate_required(&requirement_rows);
    let logs_by_requirement = aggregate_allocations_by_requirement(&log_rows);
    let gap_rows = compute_gaps(&required, &logs_by_requirement);

    let by_id: HashMap<&str, &IntervalRecord> =
        requirements.iter().map(|r| (r.id.as_str(), r)).collect();
    let gaps = gap_rows
        .into_iter()
        .map(|row| {
            let detail = by_id.get(row.requirement_id.as_str());
            GapDetailRow {
                mission_name: detail.and_then(|r| r.mission_name.clone()),
                role_name: detail.and_then(|r| r.role_name.clone()),
                client_name: detail.and_then(|r| r.client_name.clone()),
                scenario_name: detail.and_then(|r| r.scenario_name.clone()),
                seniority: detail.and_then(|r| r.seniority.clone()),
                probability: detail.map(|r| r.probability).unwrap_or(0.0),
                requirement_id: row.requirement_id,
                month_end: row.month_end,
                required_capacity: row.required_capacity,
                allocated_capacity: row.allocated_capacity,
                gap: row.gap,
            }
        })
        .collect();

    let explorer_utilization = explorer_utilization(&log_rows, explorers);

    PlanningTables {
        requirements: requirement_rows,
        mission_logs: log_rows,
        logs_by_requirement,
        gaps,
        explorer_utilization,
    }
}

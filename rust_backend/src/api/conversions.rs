//! Core rows into presentation DTOs.

use crate::api::types::{AllocationRow, ExplorerRow, GapTableRow, RequirementRow};
use crate::core::domain::ExpandedRow;
use crate::services::explorers::ExplorerUtilizationRow;
use crate::services::planning::GapDetailRow;

pub fn requirement_rows(rows: &[ExpandedRow]) -> Vec<RequirementRow> {
    rows.iter()
        .map(|row| RequirementRow {
            id: row.record.id.clone(),
            client: row.record.client_name.clone(),
            mission: row.record.mission_name.clone(),
            role: row.record.role_name.clone(),
            scenario: row.record.scenario_name.clone(),
            seniority: row.record.seniority.clone(),
            month_start: row.bucket.month_start,
            month_end: row.bucket.month_end,
            capacity: row.record.capacity,
            probability: row.record.probability,
            renewal: row.record.renewal,
            effective_capacity: row.effective_capacity,
            prob_required: row.effective_capacity * row.record.probability,
            projected_capacity: row.projected_capacity,
        })
        .collect()
}

pub fn allocation_rows(rows: &[ExpandedRow]) -> Vec<AllocationRow> {
    rows.iter()
        .map(|row| AllocationRow {
            id: row.record.id.clone(),
            requirement_id: row.record.requirement.first().map(str::to_string),
            explorer: row.record.explorer_name.clone(),
            role: row.record.role_name.clone(),
            mission: row.record.mission_name.clone(),
            client: row.record.client_name.clone(),
            month_end: row.bucket.month_end,
            capacity: row.record.capacity,
            effective_capacity: row.effective_capacity,
        })
        .collect()
}

/// Allocation rows for months the log is actually active; the allocations
/// view drops the coverage-zeroed rest.
pub fn active_allocation_rows(rows: &[ExpandedRow]) -> Vec<AllocationRow> {
    let active: Vec<ExpandedRow> = rows.iter().filter(|r| r.is_active()).cloned().collect();
    allocation_rows(&active)
}

pub fn gap_rows(rows: &[GapDetailRow]) -> Vec<GapTableRow> {
    rows.iter()
        .map(|row| GapTableRow {
            requirement_id: row.requirement_id.clone(),
            mission: row.mission_name.clone(),
            role: row.role_name.clone(),
            seniority: row.seniority.clone(),
            month_end: row.month_end,
            required_capacity: row.required_capacity,
            allocated_capacity: row.allocated_capacity,
            gap: row.gap,
            weighted_gap: row.weighted_gap(),
        })
        .collect()
}

pub fn explorer_rows(rows: &[ExplorerUtilizationRow]) -> Vec<ExplorerRow> {
    rows.iter()
        .map(|row| ExplorerRow {
            explorer: row.explorer_name.clone(),
            role: row.role_name.clone(),
            belt_colour: row.belt_colour.clone(),
            active: row.active,
            month_end: row.month_end,
            allocated_capacity: row.allocated_capacity,
            availability: row.availability,
        })
        .collect()
}

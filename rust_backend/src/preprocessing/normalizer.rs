//! Raw records into [`IntervalRecord`]s and [`ExplorerInfo`]s.
//!
//! Date parsing failures abort the whole batch: the bucket range depends on
//! every record's dates, so dropping a record silently would shift the
//! monthly grid for everything else. Optional numeric fields degrade to 0.0
//! instead.

use chrono::NaiveDate;
use log::{debug, warn};

use crate::core::domain::{ExplorerInfo, IntervalRecord};
use crate::core::error::NormalizeError;
use crate::parsing::record_parser::RawRecord;
use crate::preprocessing::lookup::Lookups;

/// Scenario label for lost missions; their requirements are excluded from
/// demand before expansion.
pub const LOST_SCENARIO_LABEL: &str = "9. Lost - 0%";

/// Mission logs in this state never made it to an allocation.
pub const REJECTED_STATE: &str = "Rejected";

fn normalize_interval(
    raw: &RawRecord,
    lookups: &Lookups,
) -> Result<IntervalRecord, NormalizeError> {
    let start_date = raw.required_date("_start_date")?;
    let end_date = raw.required_date("_end_date")?;
    if end_date < start_date {
        return Err(NormalizeError::InvertedInterval { id: raw.id.clone() });
    }

    let mut capacity = raw.number_or_zero("Capacity");
    if capacity < 0.0 {
        warn!("record '{}' carries negative capacity {capacity}, clamping to 0", raw.id);
        capacity = 0.0;
    }

    let role = raw.relation("Role");
    let client = raw.relation("Client");
    let mission = raw.relation("Mission");
    let scenario = raw.relation("Scenario");
    let explorer = raw.relation("EXPLORER");

    Ok(IntervalRecord {
        id: raw.id.clone(),
        role_name: lookups.roles.resolve(&role),
        client_name: lookups.clients.resolve(&client),
        mission_name: lookups.missions.resolve(&mission),
        scenario_name: lookups.scenarios.resolve(&scenario),
        explorer_name: lookups.explorers.resolve(&explorer),
        role,
        client,
        mission,
        scenario,
        explorer,
        requirement: raw.relation("mission_requirement"),
        seniority: raw.string("Seniority"),
        capacity,
        start_date,
        end_date,
        probability: raw.number_or_zero("_prob"),
        renewal: raw.number_or_zero("_renewal"),
        nominal_end_date: raw.date("_end_mission")?,
    })
}

/// Normalize a mission-requirements batch.
///
/// Requirements attached to a lost scenario are excluded from demand.
/// Fails on the first malformed record, aborting the batch whole.
pub fn normalize_requirements(
    batch: &[RawRecord],
    lookups: &Lookups,
) -> Result<Vec<IntervalRecord>, NormalizeError> {
    let mut records = Vec::with_capacity(batch.len());

    for raw in batch {
        let record = normalize_interval(raw, lookups)?;
        if record.scenario_name.as_deref() == Some(LOST_SCENARIO_LABEL) {
            debug!("excluding lost requirement '{}'", record.id);
            continue;
        }
        records.push(record);
    }

    Ok(records)
}

/// Normalize a mission-logs batch, dropping rejected logs.
pub fn normalize_logs(
    batch: &[RawRecord],
    lookups: &Lookups,
) -> Result<Vec<IntervalRecord>, NormalizeError> {
    let mut records = Vec::with_capacity(batch.len());

    for raw in batch {
        if raw.string("State").as_deref() == Some(REJECTED_STATE) {
            debug!("excluding rejected log '{}'", raw.id);
            continue;
        }
        records.push(normalize_interval(raw, lookups)?);
    }

    Ok(records)
}

/// Normalize the explorer roster. Explorer rows have no interval semantics
/// to enforce, so nothing here is fatal: a malformed roster date degrades
/// to absent with a warning instead of aborting the batch.
pub fn normalize_explorers(batch: &[RawRecord], lookups: &Lookups) -> Vec<ExplorerInfo> {
    batch
        .iter()
        .map(|raw| {
            let role = raw.relation("Role");
            ExplorerInfo {
                id: raw.id.clone(),
                name: raw.string("EXPLORER"),
                role_name: lookups.roles.resolve(&role),
                role,
                belt_colour: raw.string("Belt Colour"),
                active: raw.boolean("Active"),
                start_date: roster_date(raw, "Start Date"),
                end_date: roster_date(raw, "End Date"),
            }
        })
        .collect()
}

fn roster_date(raw: &RawRecord, field: &str) -> Option<NaiveDate> {
    match raw.date(field) {
        Ok(date) => date,
        Err(e) => {
            warn!("explorer '{}': {e}, treating as absent", raw.id);
            None
        }
    }
}

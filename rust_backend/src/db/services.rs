//! High-level orchestration: fetch a snapshot, normalize it, enrich it.

use anyhow::{Context, Result};
use log::{debug, info};

use super::repository::PlanningRepository;
use crate::preprocessing::lookup::Lookups;
use crate::preprocessing::normalizer::{
    normalize_explorers, normalize_logs, normalize_requirements,
};
use crate::services::planning::{enrich, PlanningTables};

/// Fetch every table from the repository and run the full enrich pipeline.
///
/// A fatal normalization error aborts the whole recomputation: the caller
/// gets the error, never a partially-built set of tables.
pub async fn load_planning_tables(repository: &dyn PlanningRepository) -> Result<PlanningTables> {
    let roles = repository.fetch_lookup("Roles").await?;
    let missions = repository.fetch_lookup("Mission").await?;
    let clients = repository.fetch_lookup("Clients").await?;
    let scenarios = repository.fetch_lookup("Scenarios").await?;
    let explorer_records = repository.fetch_explorers().await?;
    let requirement_records = repository.fetch_requirements().await?;
    let log_records = repository.fetch_logs().await?;

    debug!(
        "fetched snapshot: {} requirement records, {} log records",
        requirement_records.len(),
        log_records.len()
    );

    let lookups = Lookups::from_batches(
        &roles,
        &missions,
        &clients,
        &scenarios,
        &explorer_records,
    );

    let requirements = normalize_requirements(&requirement_records, &lookups)
        .context("Failed to normalize mission requirements")?;
    let logs =
        normalize_logs(&log_records, &lookups).context("Failed to normalize mission logs")?;
    let explorers = normalize_explorers(&explorer_records, &lookups);

    let tables = enrich(&requirements, &logs, &explorers);
    info!(
        "planning tables ready: {} requirement rows, {} gap rows",
        tables.requirements.len(),
        tables.gaps.len()
    );
    Ok(tables)
}

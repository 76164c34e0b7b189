//! In-memory repository for unit testing and local development.

use std::collections::HashMap;

use async_trait::async_trait;

use super::repository::{PlanningRepository, RepositoryError, RepositoryResult};
use crate::parsing::record_parser::{parse_record_batch_str, RawRecord};

/// Well-known batch names the local repository serves.
pub const REQUIREMENTS: &str = "Mission Requirements";
pub const LOGS: &str = "Mission Logs";
pub const EXPLORERS: &str = "EXPLORER";

/// Repository over in-memory record batches keyed by table name.
#[derive(Debug, Default)]
pub struct LocalRepository {
    batches: HashMap<String, Vec<RawRecord>>,
}

impl LocalRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one table's batch.
    pub fn insert_batch(&mut self, table: &str, records: Vec<RawRecord>) {
        self.batches.insert(table.to_string(), records);
    }

    /// Load one table's batch from a JSON payload.
    pub fn insert_batch_json(&mut self, table: &str, json: &str) -> RepositoryResult<()> {
        let records = parse_record_batch_str(json)
            .map_err(|e| RepositoryError::Query(format!("{table}: {e:#}")))?;
        self.insert_batch(table, records);
        Ok(())
    }

    fn batch(&self, table: &str) -> RepositoryResult<Vec<RawRecord>> {
        // Missing tables serve as empty rather than failing: a fresh base
        // legitimately has no logs yet.
        Ok(self.batches.get(table).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl PlanningRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(true)
    }

    async fn fetch_requirements(&self) -> RepositoryResult<Vec<RawRecord>> {
        self.batch(REQUIREMENTS)
    }

    async fn fetch_logs(&self) -> RepositoryResult<Vec<RawRecord>> {
        self.batch(LOGS)
    }

    async fn fetch_explorers(&self) -> RepositoryResult<Vec<RawRecord>> {
        self.batch(EXPLORERS)
    }

    async fn fetch_lookup(&self, table: &str) -> RepositoryResult<Vec<RawRecord>> {
        self.batch(table)
    }
}

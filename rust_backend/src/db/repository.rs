//! Repository trait for the planning data source.
//!
//! Implementations fetch raw record batches; everything downstream of the
//! fetch is pure. The single-user dashboard re-fetches per interaction, so
//! there is no caching or invalidation at this seam.

use async_trait::async_trait;

use crate::parsing::record_parser::RawRecord;

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Error type for repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    Query(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<String> for RepositoryError {
    fn from(s: String) -> Self {
        RepositoryError::Internal(s)
    }
}

impl From<&str> for RepositoryError {
    fn from(s: &str) -> Self {
        RepositoryError::Internal(s.to_string())
    }
}

/// Batch fetches against the planning base.
///
/// Implementations must be `Send + Sync` so a single instance can be shared
/// behind an `Arc`.
#[async_trait]
pub trait PlanningRepository: Send + Sync {
    /// Check that the data source is reachable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// All mission-requirement records (demand side).
    async fn fetch_requirements(&self) -> RepositoryResult<Vec<RawRecord>>;

    /// All mission-log records (supply side).
    async fn fetch_logs(&self) -> RepositoryResult<Vec<RawRecord>>;

    /// The explorer roster.
    async fn fetch_explorers(&self) -> RepositoryResult<Vec<RawRecord>>;

    /// A lookup table by name (roles, missions, clients, scenarios).
    async fn fetch_lookup(&self, table: &str) -> RepositoryResult<Vec<RawRecord>>;
}

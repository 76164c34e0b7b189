//! Data-source module: the repository seam in front of the planning base.
//!
//! The core engine never does I/O; it receives already-materialized record
//! batches. This module owns that boundary via the Repository pattern:
//!
//! - `repository`: trait definition for batch fetches
//! - `local`: in-memory implementation for unit testing and local development
//! - `config`: TOML-backed source configuration (base id, table names)
//! - `services`: high-level orchestration (fetch everything, normalize, enrich)

pub mod config;
#[cfg(feature = "local-repo")]
pub mod local;
pub mod repository;
pub mod services;

use std::sync::Arc;

use once_cell::sync::OnceCell;

#[cfg(feature = "local-repo")]
pub use local::LocalRepository;
pub use config::SourceConfig;
pub use repository::{PlanningRepository, RepositoryError, RepositoryResult};
pub use services::load_planning_tables;

static REPOSITORY: OnceCell<Arc<dyn PlanningRepository>> = OnceCell::new();

/// Install the process-wide repository. Fails if one is already installed.
pub fn init_repository(repository: Arc<dyn PlanningRepository>) -> RepositoryResult<()> {
    REPOSITORY
        .set(repository)
        .map_err(|_| RepositoryError::Configuration("Repository already initialized".to_string()))
}

/// The installed repository.
pub fn get_repository() -> RepositoryResult<Arc<dyn PlanningRepository>> {
    REPOSITORY
        .get()
        .cloned()
        .ok_or_else(|| RepositoryError::Configuration("Repository not initialized".to_string()))
}

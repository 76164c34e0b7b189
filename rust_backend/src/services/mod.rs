//! Orchestration over the transformation engine.
//!
//! - [`planning`]: the enrich pipeline (requirements, logs, gaps)
//! - [`explorers`]: per-explorer monthly utilization and availability
//! - [`cache`]: explicit snapshot-keyed memoization for recompute-heavy UIs

pub mod cache;
pub mod explorers;
pub mod planning;

pub use cache::SnapshotCache;
pub use explorers::{explorer_utilization, ExplorerUtilizationRow};
pub use planning::{enrich, GapDetailRow, PlanningTables};

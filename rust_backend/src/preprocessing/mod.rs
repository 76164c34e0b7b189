//! Normalization of raw record batches into domain types.
//!
//! - [`lookup`]: dictionary joins from linked record keys to display names
//! - [`normalizer`]: raw field maps into [`IntervalRecord`]s and
//!   [`ExplorerInfo`]s, with the batch-level exclusion rules
//!
//! [`IntervalRecord`]: crate::core::domain::IntervalRecord
//! [`ExplorerInfo`]: crate::core::domain::ExplorerInfo

pub mod lookup;
pub mod normalizer;

pub use lookup::{LookupTable, Lookups};
pub use normalizer::{normalize_explorers, normalize_logs, normalize_requirements};

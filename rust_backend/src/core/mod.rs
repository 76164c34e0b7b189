//! Core domain types for capacity planning.

pub mod domain;
pub mod error;

pub use domain::{ExpandedRow, ExplorerInfo, IntervalRecord, MonthBucket, Relation};
pub use error::NormalizeError;

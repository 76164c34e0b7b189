//! The temporal expansion and gap-analysis engine.
//!
//! Pure transformations over in-memory tables, applied in this order:
//!
//! - [`expansion`]: interval records into (record x month) rows
//! - [`projection`]: probability/renewal weighted capacity series
//! - [`aggregation`]: sum a measure per (grouping key, month)
//! - [`gaps`]: required vs allocated capacity per requirement and month
//! - [`filtering`]: date-range and categorical-membership predicates
//!
//! Every function here is a pure transformation of its inputs: no I/O, no
//! shared state, deterministic for a given batch.

pub mod aggregation;
pub mod expansion;
pub mod filtering;
pub mod gaps;
pub mod projection;

pub use aggregation::{aggregate, aggregate_allocations_by_requirement, aggregate_required};
pub use expansion::{bucket_range, expand, expand_batch};
pub use filtering::{filter_by_dates, filter_by_membership, TableRow};
pub use gaps::{compute_gaps, GapRow};
pub use projection::project;

//! Presentation-facing DTOs.
//!
//! The dashboard consumes plain tabular rows; these types pin the column
//! names the presentation layer relies on (`effective_capacity`,
//! `projected_capacity`, `gap`, `month_end`, and the grouping keys) so
//! internal renames never leak into the UI contract.

pub mod conversions;
pub mod types;

pub use conversions::{
    active_allocation_rows, allocation_rows, explorer_rows, gap_rows, requirement_rows,
};
pub use types::{AllocationRow, ExplorerRow, GapTableRow, RequirementRow};

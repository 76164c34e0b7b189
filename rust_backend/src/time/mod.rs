//! Calendar-month arithmetic used by the expansion engine.

pub mod month;

pub use month::{bucket_of, month_end, month_range, month_start};

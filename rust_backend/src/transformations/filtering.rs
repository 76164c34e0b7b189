//! Date-range and categorical-membership filters.
//!
//! Both filters work on any monthly table through the [`TableRow`] trait,
//! are pure, and compose in any order: applying them in either sequence
//! keeps the same result set.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::core::domain::ExpandedRow;

/// Row of a monthly table that can be filtered by date and by named
/// categorical columns.
///
/// `has_column` says whether the table carries a display column at all;
/// membership filters treat unknown columns as unconstrained. `column`
/// returns the row's value, which may be absent even for a known column
/// (an unresolved lookup, say) — such rows do not match any allowed set.
pub trait TableRow {
    fn month_end(&self) -> NaiveDate;
    fn has_column(name: &str) -> bool
    where
        Self: Sized;
    fn column(&self, name: &str) -> Option<&str>;
}

impl TableRow for ExpandedRow {
    fn month_end(&self) -> NaiveDate {
        self.bucket.month_end
    }

    fn has_column(name: &str) -> bool {
        matches!(
            name,
            "role" | "client" | "mission" | "scenario" | "explorer" | "seniority"
        )
    }

    fn column(&self, name: &str) -> Option<&str> {
        match name {
            "role" => self.record.role_name.as_deref(),
            "client" => self.record.client_name.as_deref(),
            "mission" => self.record.mission_name.as_deref(),
            "scenario" => self.record.scenario_name.as_deref(),
            "explorer" => self.record.explorer_name.as_deref(),
            "seniority" => self.record.seniority.as_deref(),
            _ => None,
        }
    }
}

/// Keep rows whose `month_end` falls in `[start_date, end_date]` inclusive.
pub fn filter_by_dates<R: TableRow + Clone>(
    rows: &[R],
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> Vec<R> {
    rows.iter()
        .filter(|row| {
            let month_end = row.month_end();
            month_end >= start_date && month_end <= end_date
        })
        .cloned()
        .collect()
}

/// Keep rows whose value in each named column is one of the allowed values.
///
/// A column the table does not have, or an empty allowed set, constrains
/// nothing; both are no-ops rather than errors so UI multi-selects can pass
/// their state through unconditionally.
pub fn filter_by_membership<R: TableRow + Clone>(
    rows: &[R],
    allowed: &HashMap<String, Vec<String>>,
) -> Vec<R> {
    rows.iter()
        .filter(|row| {
            allowed.iter().all(|(column, values)| {
                if values.is_empty() || !R::has_column(column) {
                    return true;
                }
                match row.column(column) {
                    Some(value) => values.iter().any(|v| v == value),
                    None => false,
                }
            })
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::{IntervalRecord, MonthBucket};
    use crate::time::month::{month_end, month_start};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn row(role: &str, month: u32) -> ExpandedRow {
        let anchor = date(2022, month, 1);
        ExpandedRow {
            record: IntervalRecord {
                id: format!("r-{role}-{month}"),
                role_name: Some(role.to_string()),
                capacity: 1.0,
                start_date: date(2022, 1, 1),
                end_date: date(2022, 12, 31),
                ..Default::default()
            },
            bucket: MonthBucket::new(month_start(anchor), month_end(anchor)),
            effective_capacity: 1.0,
            projected_capacity: 0.0,
        }
    }

    fn sample() -> Vec<ExpandedRow> {
        vec![
            row("Engineer", 1),
            row("Engineer", 2),
            row("Analyst", 2),
            row("Analyst", 3),
        ]
    }

    #[test]
    fn date_filter_is_inclusive() {
        let rows = sample();
        let kept = filter_by_dates(&rows, date(2022, 2, 28), date(2022, 3, 31));
        assert_eq!(kept.len(), 3);
        assert!(kept.iter().all(|r| r.month_end() >= date(2022, 2, 28)));
    }

    #[test]
    fn membership_filter_selects_named_values() {
        let rows = sample();
        let mut allowed = HashMap::new();
        allowed.insert("role".to_string(), vec!["Analyst".to_string()]);

        let kept = filter_by_membership(&rows, &allowed);
        assert_eq!(kept.len(), 2);
        assert!(kept.iter().all(|r| r.column("role") == Some("Analyst")));
    }

    #[test]
    fn empty_allowed_set_is_a_no_op() {
        let rows = sample();
        let mut allowed = HashMap::new();
        allowed.insert("role".to_string(), vec![]);

        assert_eq!(filter_by_membership(&rows, &allowed), rows);
    }

    #[test]
    fn unknown_column_is_a_no_op() {
        let rows = sample();
        let mut allowed = HashMap::new();
        allowed.insert("belt_colour".to_string(), vec!["Black".to_string()]);

        assert_eq!(filter_by_membership(&rows, &allowed), rows);
    }

    #[test]
    fn filters_commute() {
        let rows = sample();
        let mut allowed = HashMap::new();
        allowed.insert("role".to_string(), vec!["Engineer".to_string()]);
        let (start, end) = (date(2022, 1, 31), date(2022, 2, 28));

        let a = filter_by_dates(&filter_by_membership(&rows, &allowed), start, end);
        let b = filter_by_membership(&filter_by_dates(&rows, start, end), &allowed);
        assert_eq!(a, b);
    }

    #[test]
    fn rows_without_the_value_are_dropped_when_constrained() {
        let mut rows = sample();
        rows[0].record.role_name = None;
        let mut allowed = HashMap::new();
        allowed.insert("role".to_string(), vec!["Engineer".to_string()]);

        let kept = filter_by_membership(&rows, &allowed);
        // The column exists on this table, so a row with no value in it
        // cannot match the allowed set.
        assert_eq!(kept.len(), 1);
    }
}

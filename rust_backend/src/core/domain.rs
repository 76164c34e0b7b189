//! Domain models for workforce capacity planning.
//!
//! This module provides the core data structures that represent demand and
//! supply commitments: interval records fetched from the planning base,
//! calendar-month buckets, and the expanded (record x month) rows every
//! downstream computation works on.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A foreign-key style field as stored in the planning base.
///
/// The source stores linked fields either as a bare scalar or as a list of
/// record keys, almost always with exactly one element. Keeping the full
/// shape (instead of silently taking the first element) preserves what the
/// data actually said and lets required-field accessors report an
/// explicitly-empty list as its own error condition.
///
/// # Examples
///
/// ```
/// use wcp_rust::core::domain::Relation;
///
/// let one = Relation::One("recRole1".to_string());
/// assert_eq!(one.first(), Some("recRole1"));
///
/// let many = Relation::Many(vec!["a".to_string(), "b".to_string()]);
/// assert_eq!(many.first(), Some("a"));
///
/// assert_eq!(Relation::Unresolved.first(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Relation {
    #[default]
    Unresolved,
    One(String),
    Many(Vec<String>),
}

impl Relation {
    /// First linked key, if any. Deterministic for multi-valued links
    /// (source order).
    pub fn first(&self) -> Option<&str> {
        match self {
            Relation::Unresolved => None,
            Relation::One(key) => Some(key),
            Relation::Many(keys) => keys.first().map(String::as_str),
        }
    }

    pub fn is_resolved(&self) -> bool {
        self.first().is_some()
    }
}

/// A canonical calendar month, bounded by its first and last day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wcp_rust::core::domain::MonthBucket;
///
/// let march = MonthBucket::new(
///     NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2022, 3, 31).unwrap(),
/// );
/// assert_eq!(march.month_end.to_string(), "2022-03-31");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonthBucket {
    pub month_start: NaiveDate,
    pub month_end: NaiveDate,
}

impl MonthBucket {
    pub fn new(month_start: NaiveDate, month_end: NaiveDate) -> Self {
        Self {
            month_start,
            month_end,
        }
    }
}

/// One demand or supply commitment over a date range.
///
/// Requirements (demand) and mission logs (supply) share this shape; logs
/// additionally carry the `requirement` link back to the demand row they
/// fulfil and the `explorer` who was allocated. Records are read-only
/// snapshots: every derived table is a new value.
///
/// Invariant: `start_date <= end_date` (enforced during normalization) and
/// `capacity >= 0`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntervalRecord {
    pub id: String,

    // Linked categorical attributes, with display names resolved from the
    // lookup tables where possible.
    pub role: Relation,
    pub client: Relation,
    pub mission: Relation,
    pub scenario: Relation,
    pub explorer: Relation,
    pub requirement: Relation,
    pub seniority: Option<String>,
    pub role_name: Option<String>,
    pub client_name: Option<String>,
    pub mission_name: Option<String>,
    pub scenario_name: Option<String>,
    pub explorer_name: Option<String>,

    /// Headcount-equivalent quantity (FTE), never negative.
    pub capacity: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Probability-of-occurrence weighting in [0, 1]; 0 when absent.
    pub probability: f64,
    /// Renewal weighting in [0, 1], applied past the nominal end; 0 when absent.
    pub renewal: f64,
    /// Date at which probability weighting switches to renewal weighting.
    /// May differ from `end_date`; `end_date` is used when absent.
    pub nominal_end_date: Option<NaiveDate>,
}

impl IntervalRecord {
    /// Whether this record's interval overlaps the given month at all.
    ///
    /// This is the coverage policy used everywhere in the crate: a month
    /// contributes capacity when any day of it falls inside
    /// `[start_date, end_date]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use wcp_rust::core::domain::{IntervalRecord, MonthBucket};
    ///
    /// let record = IntervalRecord {
    ///     id: "req1".to_string(),
    ///     capacity: 2.0,
    ///     start_date: NaiveDate::from_ymd_opt(2022, 3, 10).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2022, 5, 20).unwrap(),
    ///     ..Default::default()
    /// };
    ///
    /// let march = MonthBucket::new(
    ///     NaiveDate::from_ymd_opt(2022, 3, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2022, 3, 31).unwrap(),
    /// );
    /// assert!(record.overlaps(&march));
    ///
    /// let june = MonthBucket::new(
    ///     NaiveDate::from_ymd_opt(2022, 6, 1).unwrap(),
    ///     NaiveDate::from_ymd_opt(2022, 6, 30).unwrap(),
    /// );
    /// assert!(!record.overlaps(&june));
    /// ```
    pub fn overlaps(&self, bucket: &MonthBucket) -> bool {
        self.start_date <= bucket.month_end && self.end_date >= bucket.month_start
    }

    /// The date past which projection switches to the renewal weighting.
    pub fn projection_cutoff(&self) -> NaiveDate {
        self.nominal_end_date.unwrap_or(self.end_date)
    }
}

/// One staff member who can be allocated to missions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExplorerInfo {
    pub id: String,
    pub name: Option<String>,
    pub role: Relation,
    pub role_name: Option<String>,
    pub belt_colour: Option<String>,
    pub active: bool,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// The cross product of one [`IntervalRecord`] and one [`MonthBucket`].
///
/// `effective_capacity` is the record's capacity when the interval overlaps
/// the month and 0 otherwise; `projected_capacity` is the
/// probability/renewal weighted series filled in by
/// [`transformations::projection`](crate::transformations::projection).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpandedRow {
    pub record: IntervalRecord,
    pub bucket: MonthBucket,
    pub effective_capacity: f64,
    pub projected_capacity: f64,
}

impl ExpandedRow {
    /// True when the record is active in this row's month.
    pub fn is_active(&self) -> bool {
        self.effective_capacity != 0.0
    }
}

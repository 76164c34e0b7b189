//! Month boundary helpers and bucket generation.
//!
//! Everything here is pure calendar math over `chrono::NaiveDate`; the
//! expansion engine never touches a clock.

use chrono::{Datelike, Days, Months, NaiveDate};

use crate::core::domain::MonthBucket;

/// First day of the month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Days::new(u64::from(date.day0()))
}

/// Last day of the month containing `date`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use wcp_rust::time::month_end;
///
/// let d = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
/// assert_eq!(month_end(d), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
/// ```
pub fn month_end(date: NaiveDate) -> NaiveDate {
    month_start(date) + Months::new(1) - Days::new(1)
}

/// The [`MonthBucket`] containing `date`.
pub fn bucket_of(date: NaiveDate) -> MonthBucket {
    MonthBucket::new(month_start(date), month_end(date))
}

/// Contiguous run of month buckets from the month of `min_date` through the
/// month of `max_date`, inclusive. Empty when `max_date` precedes `min_date`.
pub fn month_range(min_date: NaiveDate, max_date: NaiveDate) -> Vec<MonthBucket> {
    let mut buckets = Vec::new();
    let mut current = month_start(min_date);
    let last = month_start(max_date);

    while current <= last {
        buckets.push(MonthBucket::new(current, month_end(current)));
        current = current + Months::new(1);
    }

    buckets
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_boundaries() {
        assert_eq!(month_start(date(2022, 3, 17)), date(2022, 3, 1));
        assert_eq!(month_end(date(2022, 3, 17)), date(2022, 3, 31));
        assert_eq!(month_end(date(2022, 4, 1)), date(2022, 4, 30));
        // Leap February
        assert_eq!(month_end(date(2024, 2, 1)), date(2024, 2, 29));
        assert_eq!(month_end(date(2023, 2, 15)), date(2023, 2, 28));
        // Year boundary
        assert_eq!(month_end(date(2022, 12, 31)), date(2022, 12, 31));
    }

    #[test]
    fn range_is_contiguous_and_inclusive() {
        let buckets = month_range(date(2022, 11, 20), date(2023, 2, 3));
        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets[0].month_start, date(2022, 11, 1));
        assert_eq!(buckets[3].month_end, date(2023, 2, 28));

        for pair in buckets.windows(2) {
            assert_eq!(pair[0].month_end + Days::new(1), pair[1].month_start);
        }
    }

    #[test]
    fn range_of_single_month() {
        let buckets = month_range(date(2022, 5, 10), date(2022, 5, 12));
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0], bucket_of(date(2022, 5, 1)));
    }

    #[test]
    fn inverted_range_is_empty() {
        assert!(month_range(date(2022, 6, 1), date(2022, 5, 1)).is_empty());
    }
}

//! Month labels on a fixed 30-day stride.
//!
//! Labels are `start + i * 30 days`, not true calendar months, so a
//! series can repeat one month and skip another (Jan 1 and Jan 31 both
//! read "Jan 2025"). Output parity depends on keeping it that way.

use crate::types::MonthLabel;
use chrono::{Duration, NaiveDate};

pub const STRIDE_DAYS: i64 = 30;

/// Label format: abbreviated English month plus four-digit year.
pub const LABEL_FORMAT: &str = "%b %Y";

/// The date `index` strides after `start`.
pub fn stride_date(start: NaiveDate, index: usize, stride_days: i64) -> NaiveDate {
    start + Duration::days(stride_days * index as i64)
}

pub fn stride_labels(start: NaiveDate, count: usize, stride_days: i64) -> Vec<MonthLabel> {
    (0..count)
        .map(|i| stride_date(start, i, stride_days).format(LABEL_FORMAT).to_string())
        .collect()
}

/// Labels for `count` months from `start` on the standard stride.
pub fn month_labels(start: NaiveDate, count: usize) -> Vec<MonthLabel> {
    stride_labels(start, count, STRIDE_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn simulation_labels_follow_the_stride() {
        let labels = month_labels(ymd(2025, 1, 1), 12);
        assert_eq!(
            labels,
            vec![
                "Jan 2025", "Jan 2025", "Mar 2025", "Apr 2025", "May 2025", "May 2025",
                "Jun 2025", "Jul 2025", "Aug 2025", "Sep 2025", "Oct 2025", "Nov 2025",
            ]
        );
    }

    #[test]
    fn historical_labels_end_in_september() {
        let labels = month_labels(ymd(2023, 1, 1), 10);
        assert_eq!(labels.first().map(String::as_str), Some("Jan 2023"));
        assert_eq!(labels.last().map(String::as_str), Some("Sep 2023"));
    }

    #[test]
    fn projection_labels_cross_two_years() {
        let labels = month_labels(ymd(2025, 3, 1), 24);
        assert_eq!(labels.len(), 24);
        assert_eq!(&labels[..3], &["Mar 2025", "Mar 2025", "Apr 2025"]);
        assert_eq!(labels[11], "Jan 2026");
        assert_eq!(labels[23], "Jan 2027");
    }

    #[test]
    fn stride_date_is_plain_day_arithmetic() {
        assert_eq!(stride_date(ymd(2025, 1, 1), 1, STRIDE_DAYS), ymd(2025, 1, 31));
        assert_eq!(stride_date(ymd(2025, 1, 1), 2, STRIDE_DAYS), ymd(2025, 3, 2));
    }
}

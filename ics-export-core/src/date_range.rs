//! Inclusive date range used to filter events.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{IcsExportError, IcsExportResult};

/// Days covered when only a start date (or nothing) is given.
pub const DEFAULT_RANGE_DAYS: i64 = 365;

/// Date range for filtering events. Both bounds are inclusive days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `from > to`.
    pub fn new(from: NaiveDate, to: NaiveDate) -> IcsExportResult<Self> {
        if from > to {
            return Err(IcsExportError::Config(format!(
                "Invalid date range: {} is after {}",
                from, to
            )));
        }
        Ok(DateRange { from, to })
    }

    /// Parse date arguments into a DateRange.
    /// - `from`: YYYY-MM-DD, defaults to today
    /// - `to`: YYYY-MM-DD, defaults to `from` + DEFAULT_RANGE_DAYS
    pub fn from_args(from: Option<&str>, to: Option<&str>) -> IcsExportResult<Self> {
        let from_date = match from {
            Some(s) => parse_date(s)?,
            None => Local::now().date_naive(),
        };

        let to_date = match to {
            Some(s) => parse_date(s)?,
            None => from_date + Duration::days(DEFAULT_RANGE_DAYS),
        };

        DateRange::new(from_date, to_date)
    }

    /// Earliest accepted start: midnight at the beginning of `from`.
    pub fn lower_bound(&self) -> NaiveDateTime {
        self.from.and_time(NaiveTime::MIN)
    }

    /// Latest accepted end: midnight after `to`.
    ///
    /// All-day events carry an exclusive DTEND at the following midnight, so
    /// an event on the last day of the range ends exactly here.
    pub fn upper_bound(&self) -> NaiveDateTime {
        (self.to + Duration::days(1)).and_time(NaiveTime::MIN)
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} .. {}", self.from, self.to)
    }
}

/// Parse YYYY-MM-DD
fn parse_date(s: &str) -> IcsExportResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        IcsExportError::Config(format!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn from_args_parses_both_bounds() {
        let range = DateRange::from_args(Some("2025-01-01"), Some("2025-12-31")).unwrap();
        assert_eq!(range.from, date(2025, 1, 1));
        assert_eq!(range.to, date(2025, 12, 31));
    }

    #[test]
    fn from_args_defaults_to_a_year_after_from() {
        let range = DateRange::from_args(Some("2025-03-01"), None).unwrap();
        assert_eq!(range.to, date(2026, 3, 1));
    }

    #[test]
    fn from_args_rejects_bad_format() {
        let err = DateRange::from_args(Some("01.03.2025"), None).unwrap_err();
        assert!(matches!(err, IcsExportError::Config(_)));
    }

    #[test]
    fn inverted_range_is_a_config_error() {
        let err = DateRange::new(date(2025, 2, 1), date(2025, 1, 1)).unwrap_err();
        assert!(err.to_string().contains("2025-02-01 is after 2025-01-01"));
    }

    #[test]
    fn single_day_range_is_allowed() {
        let range = DateRange::new(date(2025, 5, 5), date(2025, 5, 5)).unwrap();
        assert_eq!(range.lower_bound(), date(2025, 5, 5).and_hms_opt(0, 0, 0).unwrap());
        assert_eq!(range.upper_bound(), date(2025, 5, 6).and_hms_opt(0, 0, 0).unwrap());
    }
}

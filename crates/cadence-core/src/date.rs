//! The fixed 8-digit `YYYYMMDD` date form used on the wire and in storage.
//!
//! Stored dates are compared as strings, so the format must stay zero-padded
//! and separator-free. Everything inside the crate works on
//! [`chrono::NaiveDate`]; strings only exist at the boundary.

use chrono::{Datelike, NaiveDate};

use crate::error::CoreError;

/// `chrono` format string for the storage form.
pub const DATE_FORMAT: &str = "%Y%m%d";

/// Latest year that still fits in four digits.
pub const MAX_YEAR: i32 = 9999;

/// Parses an 8-digit `YYYYMMDD` string into a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, CoreError> {
    if s.len() != 8 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::InvalidDate(s.to_string()));
    }
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| CoreError::InvalidDate(s.to_string()))
}

/// Formats a date as `YYYYMMDD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Returns `true` when `date` can be written back in the 8-digit form.
#[inline]
pub fn is_representable(date: NaiveDate) -> bool {
    (0..=MAX_YEAR).contains(&date.year())
}

/// Last calendar day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> u32 {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|first| first.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// First day of the month following the one containing `date`.
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_and_format() {
        let date = parse_date("20240115").unwrap();
        assert_eq!(date, ymd(2024, 1, 15));
        assert_eq!(format_date(date), "20240115");
        assert_eq!(format_date(ymd(7, 3, 9)), "00070309");
    }

    #[rstest]
    #[case("")]
    #[case("2024011")]
    #[case("202401150")]
    #[case("2024-1-15")]
    #[case("20241301")]
    #[case("20230229")]
    #[case("+2024011")]
    #[case("15.01.2024")]
    fn test_parse_rejects(#[case] input: &str) {
        assert!(matches!(parse_date(input), Err(CoreError::InvalidDate(_))));
    }

    #[rstest]
    #[case(ymd(2024, 2, 10), 29)]
    #[case(ymd(2023, 2, 1), 28)]
    #[case(ymd(2024, 4, 30), 30)]
    #[case(ymd(2024, 12, 5), 31)]
    fn test_last_day_of_month(#[case] date: NaiveDate, #[case] expected: u32) {
        assert_eq!(last_day_of_month(date), expected);
    }

    #[test]
    fn test_first_of_next_month_wraps_year() {
        assert_eq!(first_of_next_month(ymd(2024, 12, 31)), Some(ymd(2025, 1, 1)));
        assert_eq!(first_of_next_month(ymd(2024, 1, 31)), Some(ymd(2024, 2, 1)));
    }

    #[test]
    fn test_is_representable() {
        assert!(is_representable(ymd(9999, 12, 31)));
        assert!(!is_representable(ymd(10000, 1, 1)));
    }
}

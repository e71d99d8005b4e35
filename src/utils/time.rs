//! Time helpers — business timezone conversions
//!
//! Calendar dates travel through the API as `YYYY-MM-DD` strings; "today"
//! and "future" comparisons are made in the configured business timezone.

use chrono::NaiveDate;
use chrono_tz::Tz;

use super::AppResult;
use crate::AppError;

/// Current Unix timestamp in milliseconds
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {}", date)))
}

/// Today's calendar date in the business timezone
pub fn today_in(tz: Tz) -> NaiveDate {
    chrono::Utc::now().with_timezone(&tz).date_naive()
}

/// Format a date back into its wire representation (YYYY-MM-DD)
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_iso_dates() {
        let d = parse_date("2026-03-15").expect("valid date");
        assert_eq!(format_date(d), "2026-03-15");
    }

    #[test]
    fn rejects_malformed_dates() {
        assert!(parse_date("15/03/2026").is_err());
        assert!(parse_date("2026-13-01").is_err());
        assert!(parse_date("").is_err());
    }
}

//! Shift duration arithmetic
//!
//! Shift times travel as wall-clock strings ("09:00 AM"). Durations are
//! computed in fractional hours; a shift must start strictly before it ends
//! on the same calendar day, so midnight-crossing intervals are rejected.

use crate::utils::AppError;
use chrono::NaiveTime;

/// Parse a wall-clock string. Accepts 12-hour ("09:00 AM") with a 24-hour
/// ("17:30") fallback for older records.
pub fn parse_wall_clock(value: &str) -> Result<NaiveTime, AppError> {
    let trimmed = value.trim();
    NaiveTime::parse_from_str(trimmed, "%I:%M %p")
        .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M"))
        .map_err(|_| AppError::validation(format!("Invalid time format: {}", value)))
}

/// Duration of a shift in fractional hours.
///
/// Zero-length and inverted intervals are rejected.
pub fn shift_hours(start_time: &str, end_time: &str) -> Result<f64, AppError> {
    let start = parse_wall_clock(start_time)?;
    let end = parse_wall_clock(end_time)?;
    if end <= start {
        return Err(AppError::validation(format!(
            "Shift end ({}) must be after start ({})",
            end_time, start_time
        )));
    }
    let minutes = (end - start).num_minutes();
    Ok(minutes as f64 / 60.0)
}

/// Lenient variant for summing stored shifts: a record with unparseable or
/// inverted times contributes zero hours instead of failing the whole
/// aggregate, with a warning for the operator.
pub fn shift_hours_lenient(start_time: &str, end_time: &str) -> f64 {
    match shift_hours(start_time, end_time) {
        Ok(hours) => hours,
        Err(_) => {
            tracing::warn!(
                start = %start_time,
                end = %end_time,
                "Skipping shift with invalid times in hour aggregate"
            );
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_whole_and_fractional_hours() {
        assert_eq!(shift_hours("09:00 AM", "05:00 PM").unwrap(), 8.0);
        assert_eq!(shift_hours("09:00 AM", "09:30 AM").unwrap(), 0.5);
        assert_eq!(shift_hours("11:45 PM", "11:59 PM").unwrap(), 14.0 / 60.0);
    }

    #[test]
    fn accepts_24_hour_fallback() {
        assert_eq!(shift_hours("09:00", "17:00").unwrap(), 8.0);
    }

    #[test]
    fn rejects_inverted_and_zero_length() {
        assert!(shift_hours("05:00 PM", "09:00 AM").is_err());
        assert!(shift_hours("09:00 AM", "09:00 AM").is_err());
        // Midnight wrap is not supported
        assert!(shift_hours("11:00 PM", "01:00 AM").is_err());
    }

    #[test]
    fn rejects_garbage() {
        assert!(shift_hours("soon", "later").is_err());
        assert!(shift_hours("", "05:00 PM").is_err());
    }

    #[test]
    fn lenient_sums_skip_bad_records() {
        assert_eq!(shift_hours_lenient("09:00 AM", "05:00 PM"), 8.0);
        assert_eq!(shift_hours_lenient("bad", "05:00 PM"), 0.0);
        assert_eq!(shift_hours_lenient("05:00 PM", "09:00 AM"), 0.0);
    }
}

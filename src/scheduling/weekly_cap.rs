//! Weekly hour cap
//!
//! Each employment type carries a weekly ceiling (56h full-time, 24h
//! part-time). The week runs Sunday through Saturday; a new shift is
//! admitted only if the employee's existing hours in that week plus the new
//! shift stay within the ceiling.

use super::hours::shift_hours_lenient;
use crate::db::models::{EmploymentType, Shift};
use crate::utils::AppError;
use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Inclusive Sunday..Saturday bounds of the week containing `date`.
pub fn week_bounds(date: NaiveDate) -> (NaiveDate, NaiveDate) {
    let days_from_sunday = date.weekday().num_days_from_sunday() as u64;
    let start = date - Days::new(days_from_sunday);
    let end = start + Days::new(6);
    (start, end)
}

/// Sum of shift hours already scheduled in the week. Canceled shifts do not
/// count against the cap.
pub fn scheduled_hours(shifts: &[Shift]) -> f64 {
    shifts
        .iter()
        .filter(|s| s.status != crate::db::models::ShiftStatus::Canceled)
        .map(|s| shift_hours_lenient(&s.start_time, &s.end_time))
        .sum()
}

/// Admit or reject a new shift against the weekly ceiling.
pub fn check_weekly_cap(
    employment_type: EmploymentType,
    existing_week_shifts: &[Shift],
    new_shift_hours: f64,
) -> Result<(), AppError> {
    let cap = employment_type.weekly_hour_cap();
    let current = scheduled_hours(existing_week_shifts);
    let total = current + new_shift_hours;
    if total > cap {
        return Err(AppError::business_rule(format!(
            "Weekly hour limit exceeded: {:.1}h scheduled + {:.1}h new = {:.1}h, \
             limit for {} employees is {:.0}h",
            current,
            new_shift_hours,
            total,
            employment_type.label(),
            cap
        )));
    }
    Ok(())
}

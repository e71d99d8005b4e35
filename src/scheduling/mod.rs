//! Scheduling rules — shift duration arithmetic and the weekly hour cap

pub mod hours;
pub mod weekly_cap;

pub use hours::{parse_wall_clock, shift_hours, shift_hours_lenient};
pub use weekly_cap::{check_weekly_cap, scheduled_hours, week_bounds};

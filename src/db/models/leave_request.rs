//! Leave Request Model
//!
//! Leave is requested by type: full-day needs no times, half-day needs a
//! start time, hourly needs both start and end. Requests move from
//! `pending` to `approved` or `rejected` exactly once.

use super::serde_helpers;
use super::InvalidTransition;
use crate::utils::AppError;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type LeaveRequestId = RecordId;

/// Leave type — decides which time fields are required
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LeaveType {
    #[serde(rename = "full-day")]
    FullDay,
    #[serde(rename = "half-day")]
    HalfDay,
    #[serde(rename = "hourly")]
    Hourly,
}

impl LeaveType {
    pub fn as_str(self) -> &'static str {
        match self {
            LeaveType::FullDay => "full-day",
            LeaveType::HalfDay => "half-day",
            LeaveType::Hourly => "hourly",
        }
    }
}

/// Leave request status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    /// Central transition check: resolved requests are immutable
    pub fn transition(self, to: LeaveStatus) -> Result<LeaveStatus, InvalidTransition> {
        match (self, to) {
            (LeaveStatus::Pending, LeaveStatus::Approved) => Ok(to),
            (LeaveStatus::Pending, LeaveStatus::Rejected) => Ok(to),
            _ => Err(InvalidTransition {
                entity: "leave request",
                from: self.as_str(),
                to: to.as_str(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }
}

/// Leave request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequest {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<LeaveRequestId>,

    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,

    pub leave_type: LeaveType,

    /// First day of leave (YYYY-MM-DD)
    pub start_date: String,

    /// Last day of leave, inclusive (YYYY-MM-DD)
    pub end_date: String,

    /// Wall-clock start, required for half-day and hourly leave
    pub start_time: Option<String>,

    /// Wall-clock end, required for hourly leave
    pub end_time: Option<String>,

    pub reason: String,

    #[serde(default)]
    pub status: LeaveStatus,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Create leave request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveRequestCreate {
    pub employee_id: String,
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub reason: String,
}

impl LeaveRequestCreate {
    /// Enforce the per-type time field requirements.
    pub fn validate_times(&self) -> Result<(), AppError> {
        match self.leave_type {
            LeaveType::FullDay => Ok(()),
            LeaveType::HalfDay => {
                if self.start_time.as_deref().unwrap_or("").trim().is_empty() {
                    return Err(AppError::validation(
                        "half-day leave requires a start time",
                    ));
                }
                Ok(())
            }
            LeaveType::Hourly => {
                if self.start_time.as_deref().unwrap_or("").trim().is_empty()
                    || self.end_time.as_deref().unwrap_or("").trim().is_empty()
                {
                    return Err(AppError::validation(
                        "hourly leave requires both start and end times",
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Status change payload (management only)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveStatusUpdate {
    pub status: LeaveStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(leave_type: LeaveType, start: Option<&str>, end: Option<&str>) -> LeaveRequestCreate {
        LeaveRequestCreate {
            employee_id: "employee:alice".into(),
            leave_type,
            start_date: "2026-09-01".into(),
            end_date: "2026-09-01".into(),
            start_time: start.map(str::to_string),
            end_time: end.map(str::to_string),
            reason: "appointment".into(),
        }
    }

    #[test]
    fn full_day_needs_no_times() {
        assert!(request(LeaveType::FullDay, None, None).validate_times().is_ok());
    }

    #[test]
    fn half_day_needs_start() {
        assert!(request(LeaveType::HalfDay, None, None).validate_times().is_err());
        assert!(request(LeaveType::HalfDay, Some(""), None).validate_times().is_err());
        assert!(
            request(LeaveType::HalfDay, Some("09:00 AM"), None)
                .validate_times()
                .is_ok()
        );
    }

    #[test]
    fn hourly_needs_both_times() {
        assert!(
            request(LeaveType::Hourly, Some("09:00 AM"), None)
                .validate_times()
                .is_err()
        );
        assert!(
            request(LeaveType::Hourly, None, Some("11:00 AM"))
                .validate_times()
                .is_err()
        );
        assert!(
            request(LeaveType::Hourly, Some("09:00 AM"), Some("11:00 AM"))
                .validate_times()
                .is_ok()
        );
    }

    #[test]
    fn only_pending_can_be_resolved() {
        assert!(LeaveStatus::Pending.transition(LeaveStatus::Approved).is_ok());
        assert!(LeaveStatus::Pending.transition(LeaveStatus::Rejected).is_ok());
        assert!(
            LeaveStatus::Approved
                .transition(LeaveStatus::Rejected)
                .is_err()
        );
        assert!(
            LeaveStatus::Rejected
                .transition(LeaveStatus::Approved)
                .is_err()
        );
    }

    #[test]
    fn wire_format() {
        assert_eq!(
            serde_json::to_value(LeaveType::FullDay).unwrap(),
            serde_json::json!("full-day")
        );
        assert_eq!(
            serde_json::to_value(LeaveStatus::Pending).unwrap(),
            serde_json::json!("pending")
        );
    }
}

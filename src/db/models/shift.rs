//! Shift Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type ShiftId = RecordId;

/// Shift status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    #[default]
    Scheduled,
    Completed,
    Canceled,
}

/// Shift entity — one scheduled work interval owned by exactly one employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Shift {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ShiftId>,

    /// Owning employee
    #[serde(with = "serde_helpers::record_id")]
    pub employee: RecordId,

    /// Calendar date (YYYY-MM-DD)
    pub shift_date: String,

    /// Wall-clock start (e.g. "09:00 AM")
    pub start_time: String,

    /// Wall-clock end (e.g. "05:00 PM")
    pub end_time: String,

    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_approved: bool,

    #[serde(default)]
    pub status: ShiftStatus,

    /// Set while an open offer exists for this shift
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub is_offered: bool,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Create shift payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftCreate {
    pub employee_id: String,
    pub shift_date: String,
    pub start_time: String,
    pub end_time: String,
}

/// Update shift payload
///
/// Edits bypass the weekly-cap validator (management-gated, matching the
/// source behavior).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shift_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approved: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShiftStatus>,
}

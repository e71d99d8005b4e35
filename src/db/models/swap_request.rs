//! Swap Request Model
//!
//! A swap request proposes exchanging the owners of two shifts. Management
//! resolves the request: approval exchanges the two shifts' employees in one
//! transaction, decline leaves both shifts untouched.

use super::serde_helpers;
use super::InvalidTransition;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type SwapRequestId = RecordId;

/// Swap request status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SwapStatus {
    #[default]
    Pending,
    Approved,
    Declined,
}

impl SwapStatus {
    /// Central transition check: only `pending` requests may be resolved
    pub fn transition(self, to: SwapStatus) -> Result<SwapStatus, InvalidTransition> {
        match (self, to) {
            (SwapStatus::Pending, SwapStatus::Approved) => Ok(to),
            (SwapStatus::Pending, SwapStatus::Declined) => Ok(to),
            _ => Err(InvalidTransition {
                entity: "swap request",
                from: self.as_str(),
                to: to.as_str(),
            }),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SwapStatus::Pending => "pending",
            SwapStatus::Approved => "approved",
            SwapStatus::Declined => "declined",
        }
    }
}

/// Swap request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapRequest {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<SwapRequestId>,

    /// Shift owned by the requester
    #[serde(with = "serde_helpers::record_id")]
    pub requester_shift: RecordId,

    /// Shift the requester wants
    #[serde(with = "serde_helpers::record_id")]
    pub requested_shift: RecordId,

    /// Employee who raised the request
    #[serde(with = "serde_helpers::record_id")]
    pub requester: RecordId,

    #[serde(default)]
    pub status: SwapStatus,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

/// Create swap request payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapRequestCreate {
    pub requester_shift_id: String,
    pub requested_shift_id: String,
}

/// Resolution payload: management approves or declines a pending request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapResolve {
    pub request_id: String,
    pub action: SwapAction,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SwapAction {
    Approve,
    Decline,
}

impl SwapAction {
    pub fn target_status(self) -> SwapStatus {
        match self {
            SwapAction::Approve => SwapStatus::Approved,
            SwapAction::Decline => SwapStatus::Declined,
        }
    }
}

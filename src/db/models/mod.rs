//! Database models

pub mod employee;
pub mod leave_request;
pub mod serde_helpers;
pub mod shift;
pub mod shift_offer;
pub mod swap_request;

pub use employee::{
    Employee, EmployeeCreate, EmployeeId, EmployeeResponse, EmployeeUpdate, EmploymentType,
    JobRole, UserRole,
};
pub use leave_request::{
    LeaveRequest, LeaveRequestCreate, LeaveRequestId, LeaveStatus, LeaveStatusUpdate, LeaveType,
};
pub use shift::{Shift, ShiftCreate, ShiftId, ShiftStatus, ShiftUpdate};
pub use shift_offer::{OfferStatus, ShiftOffer, ShiftOfferId};
pub use swap_request::{
    SwapAction, SwapRequest, SwapRequestCreate, SwapRequestId, SwapResolve, SwapStatus,
};

/// Rejected status change on a workflow record
#[derive(Debug, Clone, thiserror::Error)]
#[error("{entity} cannot move from '{from}' to '{to}'")]
pub struct InvalidTransition {
    pub entity: &'static str,
    pub from: &'static str,
    pub to: &'static str,
}

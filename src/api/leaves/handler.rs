//! Leave Request API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::auth::{AccessScope, CurrentUser};
use crate::core::ServerState;
use crate::db::models::{LeaveRequest, LeaveRequestCreate, LeaveStatus, LeaveStatusUpdate};
use crate::utils::time::parse_date;
use crate::utils::validation::{MAX_NOTE_LEN, validate_required_text};
use crate::utils::{AppError, AppResult};

/// Raise a leave request.
///
/// Employees request for themselves; management may file on anyone's
/// behalf. Per-type time requirements: half-day needs a start time, hourly
/// needs both.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<LeaveRequestCreate>,
) -> AppResult<(StatusCode, Json<LeaveRequest>)> {
    user.authorize_record(&payload.employee_id)?;

    let start = parse_date(&payload.start_date)?;
    let end = parse_date(&payload.end_date)?;
    if end < start {
        return Err(AppError::validation("Leave end date is before start date"));
    }
    validate_required_text(&payload.reason, "reason", MAX_NOTE_LEN)?;
    payload.validate_times()?;

    let employee = state
        .employees()
        .find_by_id(&payload.employee_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Employee {} not found", payload.employee_id))
        })?;
    let employee_id = employee
        .id
        .ok_or_else(|| AppError::internal("Employee record missing ID"))?;

    let request = state.leave_requests().create(employee_id, payload).await?;
    Ok((StatusCode::CREATED, Json(request)))
}

/// List leave requests — management sees all, employees their own.
pub async fn list(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<LeaveRequest>>> {
    let requests = match user.access_scope() {
        AccessScope::All => state.leave_requests().find_all().await?,
        AccessScope::SelfOnly => {
            let employee = user
                .id
                .parse()
                .map_err(|_| AppError::internal("Malformed employee ID in token"))?;
            state.leave_requests().find_by_employee(&employee).await?
        }
    };
    Ok(Json(requests))
}

/// Resolve a pending request (management only). Resolved requests are
/// immutable.
pub async fn update_status(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<LeaveStatusUpdate>,
) -> AppResult<Json<LeaveRequest>> {
    let request = state
        .leave_requests()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Leave request {} not found", id)))?;

    // Central transition check before touching the database
    request.status.transition(payload.status)?;

    let updated = state.leave_requests().update_status(&id, payload.status).await?;
    Ok(Json(updated))
}

/// Withdraw a leave request.
///
/// Employees may withdraw their own requests while still pending;
/// management may delete any.
pub async fn delete(
    State(state): State<ServerState>,
    user: CurrentUser,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let request = state
        .leave_requests()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Leave request {} not found", id)))?;

    user.authorize_record(&request.employee.to_string())?;
    if !user.is_manager() && request.status != LeaveStatus::Pending {
        return Err(AppError::conflict(
            "Only pending leave requests can be withdrawn",
        ));
    }

    let result = state.leave_requests().delete(&id).await?;
    Ok(Json(result))
}

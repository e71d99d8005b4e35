//! Shift Swap API Handlers

use axum::{Json, extract::State};
use serde::Serialize;

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::{Shift, SwapAction, SwapRequest, SwapRequestCreate, SwapResolve};
use crate::scheduling::shift_hours_lenient;
use crate::utils::time::{format_date, today_in};
use crate::utils::{AppError, AppResult};

/// A swappable shift annotated for display
#[derive(Debug, Serialize)]
pub struct CandidateView {
    pub shift: Shift,
    /// Computed duration in fractional hours (0 when times are unparseable)
    pub hours: f64,
    /// Pending swap requests already touching this shift
    pub requests: Vec<SwapRequest>,
}

/// Raise a swap request between one of your shifts and a colleague's.
///
/// Both shifts must exist, the requester must own the first, and both
/// owners must share a job role. Shifts are untouched until approval.
pub async fn create_request(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<SwapRequestCreate>,
) -> AppResult<Json<SwapRequest>> {
    if req.requester_shift_id == req.requested_shift_id {
        return Err(AppError::validation("Cannot swap a shift with itself"));
    }

    let requester_shift = state
        .shifts()
        .find_by_id(&req.requester_shift_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Shift {} not found", req.requester_shift_id))
        })?;
    let requested_shift = state
        .shifts()
        .find_by_id(&req.requested_shift_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Shift {} not found", req.requested_shift_id))
        })?;

    if requester_shift.employee.to_string() != user.id {
        return Err(AppError::forbidden(
            "You can only swap away your own shifts",
        ));
    }

    let other = state
        .employees()
        .find_by_id(&requested_shift.employee.to_string())
        .await?
        .ok_or_else(|| AppError::not_found("Requested shift's employee not found"))?;

    if other.job_role != user.job_role {
        return Err(AppError::validation(
            "Shifts can only be swapped within the same job role",
        ));
    }

    let requester = requester_shift.employee.clone();
    let requester_shift_id = requester_shift
        .id
        .ok_or_else(|| AppError::internal("Shift record missing ID"))?;
    let requested_shift_id = requested_shift
        .id
        .ok_or_else(|| AppError::internal("Shift record missing ID"))?;

    let request = state
        .swap_requests()
        .create(requester, requester_shift_id, requested_shift_id)
        .await?;
    Ok(Json(request))
}

/// Resolve a pending swap request (management only).
///
/// Approval exchanges the two shifts' owners in one transaction; decline
/// leaves both shifts untouched. Resolved requests are immutable.
pub async fn resolve_request(
    State(state): State<ServerState>,
    Json(req): Json<SwapResolve>,
) -> AppResult<Json<SwapRequest>> {
    let request = state
        .swap_requests()
        .find_by_id(&req.request_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Swap request {} not found", req.request_id))
        })?;

    // Central transition check before touching the database
    request.status.transition(req.action.target_status())?;

    let resolved = match req.action {
        SwapAction::Approve => state.swap_requests().approve(&req.request_id).await?,
        SwapAction::Decline => state.swap_requests().decline(&req.request_id).await?,
    };
    Ok(Json(resolved))
}

/// List future shifts the caller could request a swap with, annotated with
/// duration and any pending requests on them.
pub async fn list_candidates(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<Vec<CandidateView>>> {
    let viewer = user
        .id
        .parse()
        .map_err(|_| AppError::internal("Malformed employee ID in token"))?;
    let from = format_date(today_in(state.config.timezone));

    let shifts = state
        .shifts()
        .find_swap_candidates(&viewer, user.job_role, &from)
        .await?;

    let mut views = Vec::with_capacity(shifts.len());
    for shift in shifts {
        let requests = match &shift.id {
            Some(id) => state.swap_requests().find_pending_by_shift(id).await?,
            None => Vec::new(),
        };
        let hours = shift_hours_lenient(&shift.start_time, &shift.end_time);
        views.push(CandidateView {
            shift,
            hours,
            requests,
        });
    }

    Ok(Json(views))
}

//! Shift API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use crate::auth::{AccessScope, CurrentUser};
use crate::core::ServerState;
use crate::db::models::{Shift, ShiftCreate, ShiftUpdate};
use crate::scheduling::{check_weekly_cap, scheduled_hours, shift_hours, week_bounds};
use crate::utils::time::{format_date, parse_date};
use crate::utils::{AppError, AppResult};

fn parse_employee_id(id: &str) -> Result<RecordId, AppError> {
    let record: RecordId = id
        .parse()
        .map_err(|_| AppError::validation(format!("Invalid employee ID: {}", id)))?;
    if record.table() != "employee" {
        return Err(AppError::validation(format!(
            "Expected an employee ID, got: {}",
            id
        )));
    }
    Ok(record)
}

/// Create a shift.
///
/// An employee may only schedule themself; management schedules anyone.
/// The weekly hour cap for the target employee's employment type is
/// enforced against the calendar week of the shift date.
pub async fn create(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(payload): Json<ShiftCreate>,
) -> AppResult<Json<Shift>> {
    user.authorize_record(&payload.employee_id)?;

    let employee_record = parse_employee_id(&payload.employee_id)?;
    let employee = state
        .employees()
        .find_by_id(&payload.employee_id)
        .await?
        .ok_or_else(|| {
            AppError::not_found(format!("Employee {} not found", payload.employee_id))
        })?;

    let date = parse_date(&payload.shift_date)?;
    let new_hours = shift_hours(&payload.start_time, &payload.end_time)?;

    let (week_start, week_end) = week_bounds(date);
    let week_shifts = state
        .shifts()
        .find_in_range(
            &format_date(week_start),
            &format_date(week_end),
            Some(&employee_record),
        )
        .await?;

    check_weekly_cap(employee.employment_type, &week_shifts, new_hours)?;

    let shift = state
        .shifts()
        .create(
            employee_record,
            payload.shift_date,
            payload.start_time,
            payload.end_time,
        )
        .await?;

    Ok(Json(shift))
}

#[derive(Debug, Deserialize)]
pub struct WeekListRequest {
    /// Any date inside the week of interest (YYYY-MM-DD)
    pub start_date: String,
    /// Management only — list another employee's week (None means everyone)
    pub employee_id: Option<String>,
    /// List swap candidates for the week instead of own shifts
    #[serde(default)]
    pub swap: bool,
}

#[derive(Debug, Serialize)]
pub struct WeekListResponse {
    pub shifts: Vec<Shift>,
    /// The seven dates of the week, Sunday first
    pub dates: Vec<String>,
    /// Summed hours of the listed shifts
    pub total_hours: f64,
}

/// Week listing.
///
/// Resolves the Sunday..Saturday week containing `start_date` and returns
/// its shifts. Employees see their own week (or, with `swap`, shifts held
/// by others in their job role); management may see everyone's or a named
/// employee's week.
pub async fn list_week(
    State(state): State<ServerState>,
    user: CurrentUser,
    Json(req): Json<WeekListRequest>,
) -> AppResult<Json<WeekListResponse>> {
    let date = parse_date(&req.start_date)?;
    let (week_start, week_end) = week_bounds(date);
    let from = format_date(week_start);
    let to = format_date(week_end);

    let shifts = if req.swap {
        let viewer = parse_employee_id(&user.id)?;
        state
            .shifts()
            .find_candidates_in_range(&viewer, user.job_role, &from, &to)
            .await?
    } else {
        let scope_employee = match user.access_scope() {
            AccessScope::All => match &req.employee_id {
                Some(id) => Some(parse_employee_id(id)?),
                None => None,
            },
            AccessScope::SelfOnly => {
                // Employees always get their own week regardless of the
                // requested employee_id
                Some(parse_employee_id(&user.id)?)
            }
        };
        state
            .shifts()
            .find_in_range(&from, &to, scope_employee.as_ref())
            .await?
    };

    let dates = (0..7)
        .map(|i| format_date(week_start + chrono::Days::new(i)))
        .collect();
    let total_hours = scheduled_hours(&shifts);

    Ok(Json(WeekListResponse {
        shifts,
        dates,
        total_hours,
    }))
}

/// Get shift by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Shift>> {
    let shift = state
        .shifts()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Shift {} not found", id)))?;
    Ok(Json(shift))
}

/// Update a shift (management only; not weekly-cap checked)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ShiftUpdate>,
) -> AppResult<Json<Shift>> {
    if let Some(ref date) = payload.shift_date {
        parse_date(date)?;
    }
    if let (Some(start), Some(end)) = (&payload.start_time, &payload.end_time) {
        shift_hours(start, end)?;
    }
    let shift = state.shifts().update(&id, payload).await?;
    Ok(Json(shift))
}

/// Delete a shift (management only)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let result = state.shifts().delete(&id).await?;
    Ok(Json(result))
}

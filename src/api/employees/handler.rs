//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{EmployeeCreate, EmployeeResponse, EmployeeUpdate};
use crate::utils::validation::{
    MAX_ADDRESS_LEN, MAX_NAME_LEN, MAX_SHORT_TEXT_LEN, validate_email, validate_optional_text,
    validate_password, validate_required_text,
};
use crate::utils::{AppError, AppResult};

fn validate_create(payload: &EmployeeCreate) -> Result<(), AppError> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;
    validate_required_text(&payload.mobile, "mobile", MAX_SHORT_TEXT_LEN)?;
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    Ok(())
}

fn validate_update(payload: &EmployeeUpdate) -> Result<(), AppError> {
    if let Some(ref name) = payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(ref email) = payload.email {
        validate_email(email)?;
    }
    if let Some(ref password) = payload.password {
        validate_password(password)?;
    }
    if let Some(ref mobile) = payload.mobile {
        validate_required_text(mobile, "mobile", MAX_SHORT_TEXT_LEN)?;
    }
    validate_optional_text(&payload.address, "address", MAX_ADDRESS_LEN)?;
    Ok(())
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<EmployeeResponse>>> {
    let employees = state.employees().find_all().await?;
    Ok(Json(employees.into_iter().map(Into::into).collect()))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state
        .employees()
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", id)))?;
    Ok(Json(employee.into()))
}

/// Create a new employee (management only)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<EmployeeResponse>)> {
    validate_create(&payload)?;
    let employee = state.employees().create(payload).await?;
    Ok((StatusCode::CREATED, Json(employee.into())))
}

/// Update an employee (management only)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<EmployeeResponse>> {
    validate_update(&payload)?;
    let employee = state.employees().update(&id, payload).await?;
    Ok(Json(employee.into()))
}

/// Delete an employee (management only)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let result = state.employees().delete(&id).await?;
    Ok(Json(result))
}

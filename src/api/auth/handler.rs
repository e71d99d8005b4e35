//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::AppError;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::models::EmployeeResponse;
use crate::utils::AppResult;

/// Fixed delay on the login path to blunt timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: EmployeeResponse,
}

/// Login handler
///
/// Authenticates email + password and returns a JWT. Failures use one
/// unified message so email enumeration learns nothing.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let employee = state.employees().find_by_email(&req.email).await?;

    // Fixed delay before inspecting the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    let employee = match employee {
        Some(e) => {
            if !e.is_active {
                return Err(AppError::forbidden("Account has been disabled"));
            }

            let password_valid = e
                .verify_password(&req.password)
                .map_err(|e| AppError::internal(format!("Password verification failed: {}", e)))?;

            if !password_valid {
                tracing::warn!(email = %req.email, "Login failed - invalid credentials");
                return Err(AppError::invalid_credentials());
            }

            e
        }
        None => {
            tracing::warn!(email = %req.email, "Login failed - unknown email");
            return Err(AppError::invalid_credentials());
        }
    };

    let employee_id = employee
        .id
        .as_ref()
        .map(|id| id.to_string())
        .unwrap_or_default();

    let token = state
        .get_jwt_service()
        .generate_token(&employee_id, &employee.name, employee.role, employee.job_role)
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    tracing::info!(
        employee_id = %employee_id,
        role = %employee.role.as_str(),
        "Employee logged in"
    );

    Ok(Json(LoginResponse {
        token,
        user: employee.into(),
    }))
}

/// Current authenticated employee, fresh from the database
pub async fn me(
    State(state): State<ServerState>,
    user: CurrentUser,
) -> AppResult<Json<EmployeeResponse>> {
    let employee = state
        .employees()
        .find_by_id(&user.id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee {} not found", user.id)))?;
    Ok(Json(employee.into()))
}

//! Authentication Routes

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Authentication router
/// - /api/auth/login: public (skipped by the auth middleware)
/// - /api/auth/me: protected by the global require_auth middleware
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/auth/login", post(handler::login))
        .route("/api/auth/me", get(handler::me))
}

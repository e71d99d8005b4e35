//! Shift Swap API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_manager;
use crate::core::ServerState;

/// Swap router — lives under /api/shifts alongside the shift CRUD routes
pub fn router() -> Router<ServerState> {
    let open_routes = Router::new()
        .route("/api/shifts/swap-request", post(handler::create_request))
        .route("/api/shifts/swap-candidates", get(handler::list_candidates));

    // Resolution exchanges shift owners, so it is management-only
    let manage_routes = Router::new()
        .route("/api/shifts/swap", post(handler::resolve_request))
        .layer(middleware::from_fn(require_manager));

    open_routes.merge(manage_routes)
}

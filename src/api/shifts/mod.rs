//! Shift API Module

mod handler;

use axum::{Router, middleware, routing::get, routing::post};

use crate::auth::require_manager;
use crate::core::ServerState;

/// Shift router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/shifts", routes())
}

fn routes() -> Router<ServerState> {
    // Creation enforces ownership and the weekly cap in the handler, so an
    // employee may add shifts for themself.
    let open_routes = Router::new()
        .route("/", post(handler::create))
        .route("/list", post(handler::list_week))
        .route("/{id}", get(handler::get_by_id));

    // Edits and deletes are management-only and bypass the weekly cap
    let manage_routes = Router::new()
        .route(
            "/{id}",
            axum::routing::put(handler::update).delete(handler::delete),
        )
        .layer(middleware::from_fn(require_manager));

    open_routes.merge(manage_routes)
}

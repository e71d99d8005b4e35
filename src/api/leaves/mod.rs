//! Leave Request API Module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_manager;
use crate::core::ServerState;

/// Leave router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/leaves", routes())
}

fn routes() -> Router<ServerState> {
    let open_routes = Router::new()
        .route(
            "/",
            get(handler::list).post(handler::create),
        )
        .route("/{id}", axum::routing::delete(handler::delete));

    // Only management resolves requests
    let manage_routes = Router::new()
        .route("/{id}", axum::routing::put(handler::update_status))
        .layer(middleware::from_fn(require_manager));

    open_routes.merge(manage_routes)
}

//! Shift Offer API Module

mod handler;

use axum::{Router, routing::get, routing::post};

use crate::core::ServerState;

/// Offer router — lives under /api/shifts alongside the shift CRUD routes
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/shifts/offer", post(handler::create_offer))
        .route("/api/shifts/accept", post(handler::accept_offer))
        .route("/api/shifts/offered", get(handler::list_offered))
}

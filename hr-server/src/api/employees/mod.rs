//! Employee API Module

mod handler;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Employee router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/employees", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route("/{id}", get(handler::get_by_id).put(handler::update))
        .route("/{id}/cancel", post(handler::cancel_contract))
        .route("/{id}/sanction", post(handler::sanction))
        .route("/{id}/rehire", post(handler::rehire))
        .route("/{id}/report", post(handler::report))
}

//! Company API Module

mod handler;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Company router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/companies", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}", get(handler::get_by_id))
        .route("/{id}/unlock", post(handler::unlock))
}

//! Assistant API Module

mod handler;

use axum::routing::post;
use axum::Router;

use crate::state::AppState;

/// Assistant router
pub fn router() -> Router<AppState> {
    Router::new().nest("/api/assistant", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/summary", post(handler::summary))
        .route("/briefing", post(handler::briefing))
}

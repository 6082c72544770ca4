//! API routes

pub mod ask;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;
use crate::types::response::StatusResponse;

/// Build the route table
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(status))
        .route("/ask", post(ask::ask))
}

/// GET / - report the loaded model and active device
async fn status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok",
        model: state.model().to_string(),
        device: state.device().as_str(),
    })
}

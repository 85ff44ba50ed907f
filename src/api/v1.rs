use axum::{
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use crate::api::{network, AppState};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/compute", post(network::compute))
        .route("/defaults", get(network::get_defaults))
        .route("/measurements", get(network::get_measurements))
        .route("/healthz", get(healthz))
        .with_state(state)
}

pub async fn healthz() -> impl IntoResponse {
    StatusCode::OK
}

pub mod error;
pub mod network;
pub mod response;
pub mod v1;

use axum::{http::Uri, Router};
use std::{sync::Arc, time::Duration};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::{config::Config, energy_network::EnergyNetworkModel};
use error::ApiError;

/// Shared, read-only handler state
#[derive(Clone)]
pub struct AppState {
    pub cfg: Arc<Config>,
    pub model: EnergyNetworkModel,
}

impl AppState {
    pub fn new(cfg: Config) -> Self {
        Self {
            cfg: Arc::new(cfg),
            model: EnergyNetworkModel::new(),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let cfg = state.cfg.clone();
    let mut router = Router::new()
        .nest("/api/v1", v1::router(state))
        .fallback(not_found);

    if cfg.server.enable_cors {
        use axum::http::{header, HeaderValue, Method};
        let cors = CorsLayer::new()
            .allow_origin(HeaderValue::from_static("http://localhost:3000"))
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);
        router = router.layer(cors);
    }

    router
        .layer(
            ServiceBuilder::new()
                .layer(axum::extract::DefaultBodyLimit::max(64 * 1024))
                .layer(TimeoutLayer::new(Duration::from_secs(cfg.server.request_timeout_secs))),
        )
        .layer(TraceLayer::new_for_http())
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}

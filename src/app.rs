use std::sync::{atomic::AtomicU64, Arc};

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};

use crate::{api, config::AppConfig, fetcher::ProxyClient};

#[derive(Clone)]
pub struct AppState {
    pub proxy: Arc<ProxyClient>,
    /// Hands out the monotonic request token stamped on every analysis so
    /// clients can discard responses from overlapped submissions.
    pub analyze_seq: Arc<AtomicU64>,
}

pub fn build_router(config: &AppConfig) -> anyhow::Result<Router> {
    let proxy = Arc::new(ProxyClient::new(&config.proxy)?);

    let state = AppState {
        proxy,
        analyze_seq: Arc::new(AtomicU64::new(0)),
    };

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);
    let middleware = ServiceBuilder::new().layer(cors);

    let router = Router::new()
        .route("/healthz", get(api::health::health_check))
        .route("/analyze", post(api::analyze::analyze))
        .route("/generate", post(api::generate::generate))
        .route("/generate/preview", post(api::generate::preview))
        .route("/generate/edit", post(api::generate::edit))
        .layer(middleware)
        .with_state(state);

    Ok(router)
}

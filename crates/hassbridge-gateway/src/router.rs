//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{app_state::AppState, ops, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(ops::healthz))
        .route("/api/services", get(transport::http::list_services))
        .route("/api/services/:domain/:service", post(transport::http::call_service))
        .with_state(state)
}

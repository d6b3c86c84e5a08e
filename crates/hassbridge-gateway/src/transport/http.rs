//! Service-call endpoints.
//!
//! - `POST /api/services/:domain/:service` : invoke a registered service
//! - `GET  /api/services`                  : list registered services
//!
//! A dispatched call always answers `200 []`, even when the handler drops the
//! payload. Only host-level problems (bad body, unknown service) are errors.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use hassbridge_core::error::{BridgeError, ErrorCode};

use crate::app_state::AppState;
use crate::transport::codec::decode;

fn error_response(e: &BridgeError) -> Response {
    let status = match e.error_code() {
        ErrorCode::UnknownService => StatusCode::NOT_FOUND,
        ErrorCode::Internal | ErrorCode::Config => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    let body = json!({ "code": e.error_code().as_str(), "msg": e.to_string() });
    (status, Json(body)).into_response()
}

pub async fn call_service(
    State(state): State<AppState>,
    Path((domain, service)): Path<(String, String)>,
    body: Bytes,
) -> Response {
    let dispatcher = state.dispatcher();
    if !dispatcher.contains(&domain, &service) {
        let e = BridgeError::UnknownService(format!("{domain}.{service}"));
        tracing::warn!(%domain, %service, "call to unknown service");
        return error_response(&e);
    }

    let call = match decode(&domain, &service, &body) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(%domain, %service, error = %e, "service call rejected");
            return error_response(&e);
        }
    };

    match dispatcher.dispatch(call).await {
        Ok(()) => (StatusCode::OK, Json(json!([]))).into_response(),
        Err(e) => error_response(&e),
    }
}

pub async fn list_services(State(state): State<AppState>) -> impl IntoResponse {
    let services: Vec<_> = state
        .dispatcher()
        .registered_services()
        .into_iter()
        .map(|(domain, services)| json!({ "domain": domain, "services": services }))
        .collect();
    Json(services)
}

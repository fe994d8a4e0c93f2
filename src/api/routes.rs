use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::rules::RuleSet;
use crate::store::{ReceiptStore, StoreError};

use super::request::ProcessReceiptRequest;
use super::response::{ErrorResponse, HealthResponse, PointsResponse, ProcessResponse};

/// Shared application state.
pub struct AppState {
    /// Receipt and score store
    pub store: Arc<ReceiptStore>,

    /// Rule set backing the store (exposed for health reporting)
    pub ruleset: Arc<RuleSet>,

    /// Application start time
    pub start_time: Instant,

    /// Application version
    pub version: String,
}

/// Create the application router.
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/receipts/process", post(handle_process))
        .route("/receipts/:id/points", get(handle_points))
        .route("/health", get(handle_health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle receipt processing requests.
async fn handle_process(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProcessReceiptRequest>,
) -> axum::response::Response {
    let receipt = match req.into_receipt() {
        Ok(receipt) => receipt,
        Err(msg) => {
            warn!(reason = msg, "Rejected malformed receipt payload");
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::bad_request(msg)))
                .into_response();
        }
    };

    match state.store.insert(receipt) {
        Ok(id) => {
            info!(id = %id, "Receipt processed");
            (StatusCode::OK, Json(ProcessResponse { id })).into_response()
        }
        Err(e @ StoreError::InvalidTotal(_)) => {
            warn!(error = %e, "Rejected receipt with invalid total");
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::bad_request("Invalid total format")),
            )
                .into_response()
        }
        Err(e) => {
            warn!(error = %e, "Unexpected store failure on insert");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(e.to_string(), "INTERNAL_ERROR")),
            )
                .into_response()
        }
    }
}

/// Handle points lookup requests.
async fn handle_points(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    // A malformed identifier is indistinguishable from an unknown one.
    let Ok(id) = Uuid::parse_str(&id) else {
        return not_found();
    };

    match state.store.get_points(id) {
        Ok(points) => (StatusCode::OK, Json(PointsResponse { points })).into_response(),
        Err(_) => not_found(),
    }
}

fn not_found() -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse::not_found("Receipt not found")),
    )
        .into_response()
}

/// Health check endpoint.
async fn handle_health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: state.version.clone(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        rules: state.ruleset.rules.len(),
        receipts: state.store.len(),
    })
}

//! Health check endpoint.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

/// Response body for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub api: bool,
    pub database: bool,
}

/// GET /health - API and database liveness.
///
/// Always 200. `database` is a trivial probe query against the configured
/// store, with every failure collapsed to `false`.
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> Json<HealthCheckResponse> {
    let database = match state.store().ping().await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "database probe failed");
            false
        }
    };

    Json(HealthCheckResponse {
        api: true,
        database,
    })
}

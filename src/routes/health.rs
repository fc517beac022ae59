use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog_size: usize,
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub auth_service: String,
}

/// Health check endpoint - public
///
/// The catalog is in-process so only the auth collaborator can degrade;
/// a down collaborator never makes this endpoint fail outright.
pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> (StatusCode, Json<HealthResponse>) {
    let auth_result = state.supabase.health_check().await;

    let auth_status = if auth_result.is_ok() { "ok" } else { "error" };
    let status = if auth_result.is_ok() {
        "healthy"
    } else {
        "degraded"
    };

    (
        StatusCode::OK,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            catalog_size: state.catalog.len(),
            services: ServiceHealth {
                auth_service: auth_status.to_string(),
            },
        }),
    )
}

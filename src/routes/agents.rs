//! Agent profile routes
//!
//! Agents are read-only reference data served from the seeded directory.

use axum::{
    extract::{Path, State},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::response::DataResponse;
use crate::app::AppState;
use crate::domain::{Agent, Property};
use crate::error::ApiError;

/// GET /agents
pub async fn list_agents(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    DataResponse::new(state.agents.all())
}

/// GET /agents/:agent_id
pub async fn get_agent(
    State(state): State<Arc<AppState>>,
    Path(agent_id): Path<String>,
) -> Result<DataResponse<Agent>, ApiError> {
    state
        .agents
        .get(&agent_id)
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::not_found(format!("Agent {agent_id} not found")))
}

/// GET /agents/:agent_id/properties
///
/// The agent's listings; an empty list when they have none.
pub async fn list_agent_properties(
    State(state): State<Arc<AppState>>,
    Path(agent_id): Path<String>,
) -> Result<DataResponse<Vec<Property>>, ApiError> {
    if state.agents.get(&agent_id).is_none() {
        return Err(ApiError::not_found(format!("Agent {agent_id} not found")));
    }

    Ok(DataResponse::new(state.catalog.by_agent(&agent_id)))
}

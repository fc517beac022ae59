//! Property listing routes
//!
//! Search/list, single lookup, and agent-only creation over the
//! in-memory catalog.

use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::api::pagination::PaginationParams;
use crate::api::response::{Created, DataResponse};
use crate::api::Paginated;
use crate::app::AppState;
use crate::auth::RequireAuth;
use crate::catalog;
use crate::domain::{CreatePropertyRequest, Property, PropertyQuery, SearchCriteria};
use crate::error::ApiError;

/// GET /properties
///
/// Search and list properties. All criteria are optional and combine
/// with AND; results are paginated after filtering and sorting.
pub async fn search_properties(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<PropertyQuery>,
    Query(pagination): Query<PaginationParams>,
) -> Result<impl IntoResponse, ApiError> {
    let criteria = SearchCriteria::from_query(filter, state.settings.invalid_threshold_policy)?;

    let source = state.catalog.snapshot();
    let results = catalog::search(&source, &criteria);

    tracing::debug!(
        total = source.len(),
        matched = results.len(),
        "Property search"
    );

    Ok(Paginated::slice(&results, &pagination))
}

/// GET /properties/:property_id
pub async fn get_property(
    State(state): State<Arc<AppState>>,
    Path(property_id): Path<String>,
) -> Result<DataResponse<Property>, ApiError> {
    state
        .catalog
        .get(&property_id)
        .map(DataResponse::new)
        .ok_or_else(|| ApiError::not_found(format!("Property {property_id} not found")))
}

/// POST /properties
///
/// Create a new listing. Requires the agent role; the listing is owned
/// by the caller and lands at the front of the catalog.
pub async fn create_property(
    State(state): State<Arc<AppState>>,
    auth: RequireAuth,
    axum::Json(req): axum::Json<CreatePropertyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    auth.require_agent()?;
    req.validate()?;

    let property = req.into_property(&auth.user_id.to_string());
    state.catalog.insert(property.clone());

    tracing::info!(
        property_id = %property.id,
        agent_id = %property.agent_id,
        "Property listing created"
    );

    Ok(Created(DataResponse::new(property)))
}

pub mod agents;
pub mod auth;
pub mod health;
pub mod me;
pub mod properties;

use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

use crate::app::AppState;

/// Build the API router with all routes
pub fn api_router() -> Router<Arc<AppState>> {
    Router::new()
        // Public routes
        .route("/health", get(health::health_check))
        // Properties
        .route("/properties", get(properties::search_properties))
        .route("/properties", post(properties::create_property))
        .route("/properties/:property_id", get(properties::get_property))
        // Agents
        .route("/agents", get(agents::list_agents))
        .route("/agents/:agent_id", get(agents::get_agent))
        .route(
            "/agents/:agent_id/properties",
            get(agents::list_agent_properties),
        )
        // Auth (proxied to the hosted collaborator)
        .route("/auth/signup", post(auth::sign_up))
        .route("/auth/signin", post(auth::sign_in))
        .route("/auth/signout", post(auth::sign_out))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/session", get(auth::get_session))
        // Protected routes
        .route("/me", get(me::get_me))
}

use axum::{http::HeaderValue, Router};
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowMethods, CorsLayer},
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::auth::JwksCache;
use crate::catalog::{AgentDirectory, PropertyCatalog};
use crate::config::Settings;
use crate::middleware::request_id_layer;
use crate::routes;
use crate::services::SupabaseAuth;

/// Shared application state
///
/// Owns the role/session plumbing and the property-list state; handlers
/// receive it explicitly instead of reaching for module-level globals.
#[derive(Clone)]
pub struct AppState {
    pub settings: Settings,
    pub catalog: PropertyCatalog,
    pub agents: AgentDirectory,
    pub jwks_cache: JwksCache,
    pub supabase: SupabaseAuth,
}

impl AppState {
    pub fn new(
        settings: Settings,
        catalog: PropertyCatalog,
        agents: AgentDirectory,
        jwks_cache: JwksCache,
        supabase: SupabaseAuth,
    ) -> Arc<Self> {
        Arc::new(Self {
            settings,
            catalog,
            agents,
            jwks_cache,
            supabase,
        })
    }
}

/// Build the complete application with all middleware
pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = build_cors_layer(&state.settings);

    // Use DEBUG for spans to reduce overhead at INFO level
    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::DEBUG))
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(DefaultOnResponse::new().level(Level::DEBUG));

    let (set_request_id, propagate_request_id) = request_id_layer();

    // Middleware stack is applied bottom-up
    Router::new()
        .merge(routes::api_router())
        .layer(propagate_request_id)
        .layer(trace_layer)
        .layer(set_request_id)
        .layer(cors)
        .with_state(state)
}

fn build_cors_layer(settings: &Settings) -> CorsLayer {
    let origins: Vec<HeaderValue> = settings
        .cors_allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    // Longer preflight cache in dev to reduce OPTIONS requests
    let max_age = if settings.env.is_dev() {
        std::time::Duration::from_secs(86400)
    } else {
        std::time::Duration::from_secs(3600)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::list([
            axum::http::Method::GET,
            axum::http::Method::POST,
            axum::http::Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            axum::http::header::AUTHORIZATION,
            axum::http::header::CONTENT_TYPE,
            axum::http::header::ACCEPT,
            axum::http::HeaderName::from_static("x-request-id"),
        ]))
        .allow_credentials(true)
        .max_age(max_age)
}

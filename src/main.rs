mod api;
mod app;
mod auth;
mod catalog;
mod config;
mod domain;
mod error;
mod logging;
mod middleware;
mod routes;
mod services;

use anyhow::{Context, Result};
use std::time::Duration;

use catalog::{AgentDirectory, PropertyCatalog};
use services::SupabaseAuth;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Load configuration
    let settings = config::Settings::from_env()?;

    // Initialize logging
    logging::init_logging(&settings.env);

    tracing::info!(
        env = ?settings.env,
        server_addr = %settings.server_addr,
        "Starting PropertyMatch backend"
    );

    // Shared HTTP client for collaborator calls; reusing one client
    // avoids per-request connection setup.
    let http_client = reqwest::Client::builder()
        .timeout(Duration::from_secs(settings.auth_timeout_seconds))
        .build()
        .context("Failed to create HTTP client")?;

    // Seed the in-memory catalog
    let catalog = PropertyCatalog::with_seed();
    let agents = AgentDirectory::with_seed();
    tracing::info!(
        properties = catalog.len(),
        agents = agents.len(),
        "Catalog seeded"
    );

    // Auth collaborator client
    let supabase = SupabaseAuth::new(
        http_client.clone(),
        &settings.supabase_url,
        &settings.supabase_anon_key,
    );

    // JWKS cache for JWT verification
    let jwks_cache = auth::JwksCache::new(
        http_client,
        settings.supabase_jwt_jwks_url.clone(),
        settings.supabase_jwt_issuer.clone(),
        settings.supabase_jwt_audience.clone(),
        settings.jwks_cache_ttl_seconds,
    );

    // Optionally warm the JWKS cache
    if let Err(e) = jwks_cache.warm_cache().await {
        tracing::warn!(error = %e, "Failed to warm JWKS cache - will fetch on first request");
    }

    // Create application state
    let state = app::AppState::new(settings.clone(), catalog, agents, jwks_cache, supabase);

    // Build application
    let app = app::create_app(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&settings.server_addr).await?;
    tracing::info!("Listening on {}", settings.server_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

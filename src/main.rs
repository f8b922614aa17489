// ============================================================================
// POSTGEN - AI SOCIAL MEDIA POST DRAFT API
// ============================================================================

// - JWT bearer authentication (tokens issued by the identity provider)
// - Post generation pipeline: prompt -> provider call -> parse -> persist
// - Two-tier provider failover with deterministic fallback drafts
// - Per-user history, favorites, and settings
// - Input validation
// - Proper error handling
// - Structured logging

mod auth;
mod config;
mod dto;
mod errors;
mod generation;
mod models;
mod routes;
mod states;
mod store;

use crate::config::Config;
use crate::generation::GenerationClient;
use crate::states::AppState;
use crate::store::Store;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .compact()
        .init();

    dotenvy::dotenv().ok();

    let config = Config::from_env();

    // Create application state
    let state = AppState {
        store: Store::new(),
        generator: Arc::new(GenerationClient::from_config(&config.providers)),
        jwt_secret: config.jwt_secret.clone(),
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the router
    let app = routes::router(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await.unwrap();

    info!("Server running on http://{}", config.bind_addr);
    info!("API Endpoints:");
    info!("  GET    /health          - Health check");
    info!("  POST   /posts/generate  - Generate post drafts (auth)");
    info!("  GET    /posts           - List history, newest first (auth)");
    info!("  DELETE /posts/:id       - Delete a post (auth, idempotent)");
    info!("  GET    /favorites       - List favorites (auth)");
    info!("  POST   /favorites       - Add favorite (auth)");
    info!("  DELETE /favorites/:id   - Remove favorite (auth, idempotent)");
    info!("  GET    /settings        - Get settings, lazily created (auth)");
    info!("  PUT    /settings        - Update settings (auth)");
    info!("  GET    /export          - Export all data (auth)");
    info!("  DELETE /data            - Clear all data (auth)");

    axum::serve(listener, app).await.unwrap();
}

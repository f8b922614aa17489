mod data;
mod favorites;
mod health;
mod posts;
mod settings;

use crate::states::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};

/// The query/mutation boundary the UI consumes.
pub fn router(state: AppState) -> Router {
    Router::new()
        // Public routes (no auth required)
        .route("/health", get(health::health_check))
        // Protected routes (auth required)
        .route("/posts/generate", post(posts::generate_posts))
        .route("/posts", get(posts::get_posts))
        .route("/posts/{id}", delete(posts::delete_post))
        .route(
            "/favorites",
            get(favorites::get_favorites).post(favorites::add_favorite),
        )
        .route("/favorites/{id}", delete(favorites::remove_favorite))
        .route(
            "/settings",
            get(settings::get_settings).put(settings::update_settings),
        )
        .route("/export", get(data::export_data))
        .route("/data", delete(data::clear_data))
        .with_state(state)
}

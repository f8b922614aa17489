use crate::{auth::current_user_id, dto::ExportResponse, errors::ApiError, states::AppState};
use axum::{Json, extract::State, http::{HeaderMap, StatusCode}};
use chrono::Utc;
use tracing::info;

/// GET /export
/// Headers: Authorization: Bearer <token>
/// Snapshot of the caller's posts, favorites, and settings.
pub async fn export_data(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<ExportResponse>, ApiError> {
    let user_id = current_user_id(&headers, &state.jwt_secret)?;

    let (posts, favorites, settings) = state.store.export_all(user_id);

    Ok(Json(ExportResponse {
        posts,
        favorites,
        settings,
        exported_at: Utc::now().to_rfc3339(),
    }))
}

/// DELETE /data
/// Headers: Authorization: Bearer <token>
/// Clears all three collections for the caller. The deletes run
/// concurrently without a cross-collection transaction.
pub async fn clear_data(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<StatusCode, ApiError> {
    let user_id = current_user_id(&headers, &state.jwt_secret)?;

    state.store.clear_all(user_id).await?;

    info!("All data cleared for user {}", user_id);

    Ok(StatusCode::NO_CONTENT)
}

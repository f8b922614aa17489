use crate::{
    auth::current_user_id,
    dto::AddFavoriteRequest,
    errors::ApiError,
    models::Favorite,
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use tracing::info;
use uuid::Uuid;
use validator::Validate;

/// GET /favorites
/// Headers: Authorization: Bearer <token>
pub async fn get_favorites(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Favorite>>, ApiError> {
    let user_id = current_user_id(&headers, &state.jwt_secret)?;
    Ok(Json(state.store.list_favorites(user_id)))
}

/// POST /favorites
/// Headers: Authorization: Bearer <token>
/// Body: the post fields to copy into favorites.
/// Rejects with 409 when the same content is already favorited.
pub async fn add_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddFavoriteRequest>,
) -> Result<(StatusCode, Json<Favorite>), ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let user_id = current_user_id(&headers, &state.jwt_secret)?;

    let favorite = state.store.add_favorite(user_id, payload.into())?;

    info!("Favorite added: {} by user {}", favorite.id, user_id);

    Ok((StatusCode::CREATED, Json(favorite)))
}

/// DELETE /favorites/:id
/// Headers: Authorization: Bearer <token>
/// Idempotent: a missing or foreign id is a no-op, still 204.
pub async fn remove_favorite(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let user_id = current_user_id(&headers, &state.jwt_secret)?;

    let removed = state.store.remove_favorite(user_id, id);
    if removed > 0 {
        info!("Favorite removed: {} by user {}", id, user_id);
    }

    Ok(StatusCode::NO_CONTENT)
}

use crate::{
    auth::current_user_id, dto::UpdateSettingsRequest, errors::ApiError, models::Settings,
    states::AppState,
};
use axum::{Json, extract::State, http::HeaderMap};
use tracing::info;

/// GET /settings
/// Headers: Authorization: Bearer <token>
/// Lazily creates the twitter/professional/auto-save defaults on first
/// read; later reads return the same record.
pub async fn get_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Settings>, ApiError> {
    let user_id = current_user_id(&headers, &state.jwt_secret)?;
    Ok(Json(state.store.get_or_create_settings(user_id)))
}

/// PUT /settings
/// Headers: Authorization: Bearer <token>
/// Body: { "default_platform": "...", "default_tone": "...", "auto_save": bool }
pub async fn update_settings(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UpdateSettingsRequest>,
) -> Result<Json<Settings>, ApiError> {
    let user_id = current_user_id(&headers, &state.jwt_secret)?;

    let settings = state.store.update_settings(
        user_id,
        payload.default_platform,
        payload.default_tone,
        payload.auto_save,
    );

    info!("Settings updated for user {}", user_id);

    Ok(Json(settings))
}

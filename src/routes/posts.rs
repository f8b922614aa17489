use crate::{
    auth::current_user_id,
    dto::{GeneratePostsRequest, GeneratePostsResponse},
    errors::ApiError,
    generation::{build_prompt, fallback_posts, parse_posts},
    models::Post,
    states::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use tracing::{info, warn};
use uuid::Uuid;
use validator::Validate;

/// POST /posts/generate
/// Headers: Authorization: Bearer <token>
/// Body: { "topic": "...", "platform": "twitter", "tone": "casual",
///         "length": "medium", "count": 3 }
///
/// Runs the whole pipeline: prompt → provider call → parse → persist.
/// When every provider is down the deterministic fallback drafts are
/// returned instead, so this operation never fails outright.
pub async fn generate_posts(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<GeneratePostsRequest>,
) -> Result<Json<GeneratePostsResponse>, ApiError> {
    payload
        .validate()
        .map_err(|e| ApiError::ValidationError(e.to_string()))?;

    let user_id = current_user_id(&headers, &state.jwt_secret)?;

    let prompt = build_prompt(
        &payload.topic,
        payload.platform,
        payload.tone,
        payload.length,
        payload.count,
    );

    let posts = match state.generator.generate(&prompt).await {
        Ok(raw) => {
            let drafts = parse_posts(&raw, payload.count as usize);
            state.store.save_generated_posts(
                user_id,
                &drafts,
                payload.platform,
                payload.tone,
                &payload.topic,
            );
            info!("Generated {} posts for user {}", drafts.len(), user_id);
            drafts
        }
        Err(err) => {
            // Sole trigger for the fallback generator; never surfaced.
            warn!("Generation unavailable for user {}: {}", user_id, err);
            fallback_posts(
                &payload.topic,
                payload.platform,
                payload.tone,
                payload.length,
                payload.count,
            )
        }
    };

    Ok(Json(GeneratePostsResponse { posts }))
}

/// GET /posts
/// Headers: Authorization: Bearer <token>
pub async fn get_posts(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Post>>, ApiError> {
    let user_id = current_user_id(&headers, &state.jwt_secret)?;
    Ok(Json(state.store.list_posts(user_id)))
}

/// DELETE /posts/:id
/// Headers: Authorization: Bearer <token>
/// Idempotent: a missing or foreign id is a no-op, still 204.
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let user_id = current_user_id(&headers, &state.jwt_secret)?;

    let removed = state.store.delete_post(user_id, id);
    if removed > 0 {
        info!("Post deleted: {} by user {}", id, user_id);
    }

    Ok(StatusCode::NO_CONTENT)
}

//! API endpoint handlers.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::super::AppState;

/// Selectable features as `[{"id", "title"}]`.
pub async fn api_features(State(state): State<AppState>) -> impl IntoResponse {
    match state.client.feature_list().await {
        Ok(features) => Json(features).into_response(),
        Err(e) => {
            tracing::error!("Failed to load feature list: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

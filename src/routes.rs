use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::events::gate;
use crate::events::types::ChatPost;
use crate::preferences::{is_language_code, UserPreference};
use crate::state::AppState;

/// Header the chat platform injects to identify the calling user.
const USER_ID_HEADER: &str = "X-User-Id";

pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Event intake from the platform
        .route("/api/events/message", post(message_event))
        // Health check
        .route("/api/health", get(health_check))
        // Preference surface
        .route("/api/preference", get(get_preference).post(set_preference))
        // On-demand translation of an existing post
        .route("/api/translate", get(translate_post))
}

type ApiError = (StatusCode, Json<Value>);

fn api_error(status: StatusCode, message: &str) -> ApiError {
    (status, Json(json!({ "error": message })))
}

fn authed_user(headers: &HeaderMap) -> Result<String, ApiError> {
    headers
        .get(USER_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .ok_or_else(|| api_error(StatusCode::UNAUTHORIZED, "not authorized"))
}

/// Always answers 200: translation failures are logged and dropped, the
/// platform must never see an event delivery as failed.
async fn message_event(State(state): State<AppState>, Json(event): Json<ChatPost>) -> StatusCode {
    gate::on_message(&state, &event).await;
    StatusCode::OK
}

async fn health_check(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "status": "ok",
        "provider": state.translator.as_ref().map(|p| p.kind()),
    }))
}

async fn get_preference(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Option<UserPreference>>, ApiError> {
    let user_id = authed_user(&headers)?;
    // Null body when the user never opted in; absence is not an error
    Ok(Json(state.preferences.get(&user_id)))
}

async fn set_preference(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(mut preference): Json<UserPreference>,
) -> Result<Json<UserPreference>, ApiError> {
    let user_id = authed_user(&headers)?;
    if preference.user_id != user_id {
        return Err(api_error(StatusCode::BAD_REQUEST, "user mismatch"));
    }
    if let Err(e) = preference.validate() {
        return Err(api_error(StatusCode::BAD_REQUEST, &e.to_string()));
    }

    preference.updated_at = chrono::Utc::now();
    state.preferences.set(preference.clone());
    Ok(Json(preference))
}

#[derive(Debug, Deserialize)]
struct TranslateParams {
    post_id: String,
    source: String,
    target: String,
}

#[derive(Debug, Serialize)]
struct TranslatedMessage {
    id: String,
    post_id: String,
    source_language: String,
    source_text: String,
    target_language: String,
    translated_text: String,
    update_at: i64,
}

async fn translate_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<TranslateParams>,
) -> Result<Json<TranslatedMessage>, ApiError> {
    authed_user(&headers)?;

    if params.post_id.is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "invalid parameter: post_id"));
    }
    if !is_language_code(&params.source) {
        return Err(api_error(StatusCode::BAD_REQUEST, "invalid parameter: source"));
    }
    if !is_language_code(&params.target) {
        return Err(api_error(StatusCode::BAD_REQUEST, "invalid parameter: target"));
    }

    let post = state
        .chat
        .get_post(&params.post_id)
        .await
        .map_err(|_| api_error(StatusCode::BAD_REQUEST, "no post to translate"))?;

    let provider = state.translator.as_ref().ok_or_else(|| {
        api_error(
            StatusCode::INTERNAL_SERVER_ERROR,
            "no translation provider configured",
        )
    })?;

    let translated_text = provider
        .translate(&post.message, &params.source, &params.target)
        .await
        .map_err(|e| {
            api_error(
                StatusCode::BAD_REQUEST,
                &format!("translation failed: {}", e),
            )
        })?;

    Ok(Json(TranslatedMessage {
        id: format!(
            "{}{}{}{}",
            params.post_id, params.source, params.target, post.update_at
        ),
        post_id: params.post_id,
        source_language: params.source,
        source_text: post.message,
        target_language: params.target,
        translated_text,
        update_at: post.update_at,
    }))
}

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{error, info};

use crate::state::AppState;

pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/translate", post(translate))
        .route("/health", get(health_check))
}

#[derive(Debug, Deserialize)]
pub struct TranslationRequest {
    pub japanese_text: String,
    pub model: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TranslationResponse {
    pub korean_text: String,
    pub model_used: String,
}

async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslationRequest>,
) -> Result<Json<TranslationResponse>, (StatusCode, Json<Value>)> {
    info!("Translation request: {}", request.japanese_text);

    if request.japanese_text.trim().is_empty() {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": "japanese_text must not be empty"})),
        ));
    }

    match state
        .translator
        .translate(&request.japanese_text, request.model.as_deref())
        .await
    {
        Ok(translation) => Ok(Json(TranslationResponse {
            korean_text: translation.korean_text,
            model_used: translation.model_used,
        })),
        Err(e) => {
            error!("Translation failed: {}", e);
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": format!("translation failed: {}", e)})),
            ))
        }
    }
}

async fn health_check() -> Json<Value> {
    Json(json!({"status": "healthy"}))
}

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services::{formatting, recommendation, translation};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub mood: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum RecommendResponse {
    Recommendation { recommendation: String },
    Error { error: String },
}

#[derive(Debug, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub language: String,
}

#[derive(Debug, Serialize)]
pub struct TranslateResponse {
    pub translated_text: String,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Mood-based restaurant recommendation
///
/// Upstream failures never surface as HTTP errors here: the frontend renders
/// whatever field comes back, so a failed provider call turns into an error
/// string in the body.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> Json<RecommendResponse> {
    let location = request
        .location
        .as_deref()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| state.config.default_city.clone());

    match recommendation::recommend(state.provider.clone(), &request.mood, &location).await {
        Ok(text) => Json(RecommendResponse::Recommendation {
            recommendation: formatting::decorate(&text),
        }),
        Err(e) => {
            tracing::error!(error = %e, mood = %request.mood, "Recommendation failed");
            Json(RecommendResponse::Error {
                error: "Error getting recommendation".to_string(),
            })
        }
    }
}

/// Translate a recommendation into one of the supported languages
pub async fn translate(
    State(state): State<AppState>,
    Json(request): Json<TranslateRequest>,
) -> AppResult<Json<TranslateResponse>> {
    let translated_text =
        translation::translate(state.provider.clone(), &request.text, &request.language).await?;

    Ok(Json(TranslateResponse { translated_text }))
}

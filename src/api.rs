use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use crate::llm::{request_analysis, RelayError};
use crate::render::{render_analysis, RenderedAnalysis};
use crate::TARGET_WEB_REQUEST;

/// Shared handler state: one HTTP client reused across requests, plus the
/// API credential. Nothing here is mutable; every request is independent.
#[derive(Clone)]
pub struct AppState {
    pub client: reqwest::Client,
    pub api_key: String,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub article: String,
}

#[derive(Serialize)]
pub struct AnalyzeResponse {
    pub analysis: String,
}

#[derive(Deserialize)]
pub struct RenderRequest {
    #[serde(default)]
    pub analysis: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No article text provided")]
    InvalidInput,
    #[error("Error analyzing article. Please try again.")]
    Upstream { details: String },
}

impl From<RelayError> for ApiError {
    fn from(err: RelayError) -> Self {
        match err {
            RelayError::Transport(e) => ApiError::Upstream {
                details: e.to_string(),
            },
            RelayError::Upstream { details } => ApiError::Upstream { details },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            ApiError::InvalidInput => (
                StatusCode::BAD_REQUEST,
                json!({ "error": self.to_string() }),
            ),
            ApiError::Upstream { details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({ "error": self.to_string(), "details": details }),
            ),
        };
        (status, Json(body)).into_response()
    }
}

/// Builds the application router: the two API routes, with the interactive
/// page and its script served as-is from `public/`.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/analyze", post(analyze))
        .route("/api/render", post(render))
        .with_state(state)
        .fallback_service(ServeDir::new("public"))
        .layer(TraceLayer::new_for_http())
}

fn validate_article(article: &str) -> Result<(), ApiError> {
    if article.trim().is_empty() {
        return Err(ApiError::InvalidInput);
    }
    Ok(())
}

/// `POST /api/analyze`: forwards the article through the fixed prompt and
/// returns the raw text reply. Rejects empty articles before any outbound
/// call is made.
async fn analyze(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
    validate_article(&payload.article)?;

    info!(target: TARGET_WEB_REQUEST, "Attempting to analyze article...");

    let analysis = request_analysis(&state.client, &state.api_key, &payload.article)
        .await
        .map_err(|err| {
            error!(target: TARGET_WEB_REQUEST, "Error analyzing article: {}", err);
            ApiError::from(err)
        })?;

    Ok(Json(AnalyzeResponse { analysis }))
}

/// `POST /api/render`: pure transform of a raw reply into its structured
/// display sections. Parse misses come back as placeholders, never errors.
async fn render(Json(payload): Json<RenderRequest>) -> Json<RenderedAnalysis> {
    Json(render_analysis(&payload.analysis))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_article_is_rejected() {
        assert!(matches!(
            validate_article(""),
            Err(ApiError::InvalidInput)
        ));
        assert!(matches!(
            validate_article("   \n\t "),
            Err(ApiError::InvalidInput)
        ));
        assert!(validate_article("a real article").is_ok());
    }

    #[test]
    fn test_invalid_input_maps_to_400() {
        let response = ApiError::InvalidInput.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_upstream_error_maps_to_500() {
        let response = ApiError::Upstream {
            details: "overloaded".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_missing_article_field_deserializes_empty() {
        let payload: AnalyzeRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.article, "");
    }
}

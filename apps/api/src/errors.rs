use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::audit::fetcher::FetchError;
use crate::llm::LlmError;

/// JSON body extractor whose rejection goes through `AppError`, so malformed
/// payloads come back as 400 with the `{"message"}` body every other error
/// uses instead of axum's plain-text 422.
#[derive(FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Wire contract: every error body is `{"message": "..."}`. Validation maps to
/// 400, explicit missing-row mutations to 404, everything else to 500 with a
/// generic message. Root causes are only visible in server logs.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("model error: {0}")]
    Llm(#[from] LlmError),

    #[error("fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "A database error occurred".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Fetch(e) => {
                tracing::error!("Page fetch error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch the requested page".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({ "message": message }));

        (status, body).into_response()
    }
}

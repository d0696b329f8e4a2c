use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::leads::ingest::IngestError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Upload error: {0}")]
    Ingest(#[from] IngestError),

    #[error("AI service is not enabled on backend.")]
    AiDisabled,

    #[error("LLM error: {0}")]
    Llm(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Ingest(e) => (StatusCode::BAD_REQUEST, "INVALID_UPLOAD", e.to_string()),
            AppError::AiDisabled => (StatusCode::BAD_REQUEST, "AI_DISABLED", self.to_string()),
            AppError::Llm(msg) => {
                tracing::error!("LLM error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "LLM_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Ingest(IngestError::Empty), StatusCode::BAD_REQUEST),
            (AppError::AiDisabled, StatusCode::BAD_REQUEST),
            (AppError::Llm("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (
                AppError::Internal(anyhow::anyhow!("boom")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}

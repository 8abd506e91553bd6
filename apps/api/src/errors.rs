use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Each failure kind keeps its own variant even where the external message is generic,
/// so callers and tests can tell them apart.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("Text extraction failed: {0}")]
    ExtractionFailure(String),

    #[error("No text content could be extracted")]
    NoContent,

    #[error("No criteria could be extracted from the document")]
    NoCriteriaExtracted,

    #[error("Criteria extraction failed: {0}")]
    CriteriaExtractionFailure(String),

    #[error("Empty response from model")]
    EmptyModelResponse,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("No files were processed successfully")]
    NoFilesProcessed,

    #[error("Upstream LLM error: {0}")]
    UpstreamFailure(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::UnsupportedFormat(ext) => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_FORMAT",
                format!("Unsupported file format '{ext}'. Please upload a PDF or DOCX file."),
            ),
            AppError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::NoCriteriaExtracted => (
                StatusCode::NOT_FOUND,
                "NO_CRITERIA_EXTRACTED",
                "No criteria could be extracted from the provided document.".to_string(),
            ),
            AppError::NoContent => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NO_CONTENT",
                "Could not extract any text from the provided file. Please check the file content."
                    .to_string(),
            ),
            AppError::NoFilesProcessed => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "NO_FILES_PROCESSED",
                "No files were processed successfully.".to_string(),
            ),
            AppError::ExtractionFailure(msg) => {
                tracing::error!("Extraction error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "EXTRACTION_FAILED",
                    "Could not read the uploaded document".to_string(),
                )
            }
            AppError::CriteriaExtractionFailure(msg) => {
                tracing::error!("Criteria extraction error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "CRITERIA_EXTRACTION_FAILED",
                    "No criteria could be extracted from the provided document.".to_string(),
                )
            }
            AppError::EmptyModelResponse => {
                tracing::error!("LLM returned an empty reply");
                (
                    StatusCode::BAD_GATEWAY,
                    "EMPTY_MODEL_RESPONSE",
                    "The AI model returned an empty response".to_string(),
                )
            }
            AppError::UpstreamFailure(msg) => {
                tracing::error!("LLM error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
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

//! Axum route handlers for batch scoring and report download.

use std::io::ErrorKind;

use axum::{
    extract::{Multipart, Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::report::{BatchReportBuilder, FileFailure};
use crate::state::AppState;
use crate::uploads::{multipart_error, UploadedFile};

#[derive(Debug, Serialize)]
pub struct ScoreResumeResponse {
    pub message: String,
    pub file_url: String,
    pub total_processed: usize,
    pub timestamp: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<FileFailure>,
}

/// POST /score_resume
///
/// Multipart fields: `files` (repeatable) and `criteria` (comma-separated).
pub async fn handle_score_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ScoreResumeResponse>, AppError> {
    let mut files = Vec::new();
    let mut criteria = String::new();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "files" => {
                if let Some(file) = UploadedFile::from_field(field).await? {
                    files.push(file);
                }
            }
            "criteria" => {
                criteria = field.text().await.map_err(multipart_error)?;
            }
            _ => {}
        }
    }

    info!(
        "Scoring {} uploaded file(s) against criteria '{}'",
        files.len(),
        criteria
    );

    let summary = BatchReportBuilder::from_state(&state)
        .build_report(&files, &criteria)
        .await?;

    Ok(Json(ScoreResumeResponse {
        message: "Processing complete".to_string(),
        file_url: format!("/download/{}", summary.filename),
        total_processed: summary.total_processed,
        timestamp: summary.created_at.to_rfc3339(),
        failures: summary.failures,
    }))
}

/// GET /download/:filename
pub async fn handle_download(
    State(state): State<AppState>,
    Path(filename): Path<String>,
) -> Result<Response, AppError> {
    if !is_plain_filename(&filename) {
        return Err(AppError::NotFound(format!("File '{filename}' not found")));
    }

    let path = state.config.output_dir.join(&filename);
    let contents = match tokio::fs::read(&path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(AppError::NotFound(format!("File '{filename}' not found")));
        }
        Err(e) => {
            return Err(AppError::Internal(anyhow::anyhow!(
                "Failed to read report '{}': {e}",
                path.display()
            )));
        }
    };

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        contents,
    )
        .into_response())
}

/// A single path component that cannot leave the output directory.
fn is_plain_filename(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with('.')
        && !name.contains(['/', '\\', '"'])
        && !name.chars().any(char::is_control)
}

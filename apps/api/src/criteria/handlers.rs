//! Axum route handler for criteria extraction.

use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::criteria::extract_criteria;
use crate::criteria::types::CriteriaType;
use crate::errors::AppError;
use crate::extraction::{is_blank, is_supported, unsupported};
use crate::state::AppState;
use crate::uploads::{extract_upload, multipart_error, UploadedFile};

#[derive(Debug, Deserialize)]
pub struct CriteriaTypeQuery {
    #[serde(default)]
    pub criteria_type: CriteriaType,
}

#[derive(Debug, Serialize)]
pub struct ExtractCriteriaResponse {
    pub criteria: Vec<String>,
    pub criteria_type: CriteriaType,
}

/// POST /extract_criteria?criteria_type=<type>
///
/// Multipart field `file`: a job description as PDF or DOCX.
pub async fn handle_extract_criteria(
    State(state): State<AppState>,
    Query(query): Query<CriteriaTypeQuery>,
    mut multipart: Multipart,
) -> Result<Json<ExtractCriteriaResponse>, AppError> {
    let mut upload: Option<UploadedFile> = None;
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        if name == "file" {
            upload = UploadedFile::from_field(field).await?;
        }
    }

    let file = upload.ok_or_else(|| AppError::InvalidRequest("A 'file' upload is required".into()))?;
    if !is_supported(&file.filename) {
        return Err(unsupported(&file.extension()));
    }

    info!(
        "Extracting {} criteria from '{}' ({} bytes)",
        query.criteria_type,
        file.filename,
        file.data.len()
    );

    let text = extract_upload(&state.config.upload_dir, &file).await?;
    if is_blank(&text) {
        return Err(AppError::NoContent);
    }

    let criteria = extract_criteria(state.llm.as_ref(), &text, query.criteria_type).await?;

    Ok(Json(ExtractCriteriaResponse {
        criteria,
        criteria_type: query.criteria_type,
    }))
}

//! Uploaded files: multipart intake and transient on-disk copies.

use std::path::{Path, PathBuf};

use axum::extract::multipart::{Field, MultipartError};
use bytes::Bytes;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::AppError;
use crate::extraction::{self, extension_of};

/// A file received in a multipart request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client filename reduced to its last path component.
    pub filename: String,
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(filename: &str, data: impl Into<Bytes>) -> Self {
        Self {
            filename: sanitize_filename(filename),
            data: data.into(),
        }
    }

    /// Reads a multipart file field. Returns `None` for the empty part browsers send when no
    /// file was chosen.
    pub async fn from_field(field: Field<'_>) -> Result<Option<Self>, AppError> {
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await.map_err(multipart_error)?;
        if filename.is_empty() && data.is_empty() {
            return Ok(None);
        }
        Ok(Some(Self::new(&filename, data)))
    }

    /// Lowercased extension without the dot.
    pub fn extension(&self) -> String {
        extension_of(&self.filename)
    }

    /// Filename minus its extension; used as the candidate name.
    pub fn stem(&self) -> String {
        Path::new(&self.filename)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or(&self.filename)
            .to_string()
    }
}

pub fn multipart_error(e: MultipartError) -> AppError {
    AppError::InvalidRequest(format!("Malformed multipart request: {e}"))
}

/// Strips any directory part a client put in the filename.
pub fn sanitize_filename(raw: &str) -> String {
    raw.rsplit(|c: char| c == '/' || c == '\\').next().unwrap_or_default().trim().to_string()
}

/// An upload persisted under the upload directory. The file is removed when the guard drops,
/// on success and error paths alike.
#[derive(Debug)]
pub struct TransientUpload {
    path: PathBuf,
}

impl TransientUpload {
    /// Stored as `{uuid}.{extension}`; the client filename stays in memory only.
    pub async fn persist(upload_dir: &Path, file: &UploadedFile) -> Result<Self, AppError> {
        let extension = file.extension();
        let name = if extension.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            format!("{}.{extension}", Uuid::new_v4())
        };
        let path = upload_dir.join(name);
        tokio::fs::write(&path, &file.data).await.map_err(|e| {
            AppError::Internal(anyhow::anyhow!(
                "Failed to store upload '{}': {e}",
                path.display()
            ))
        })?;
        debug!("Stored transient upload {}", path.display());
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TransientUpload {
    fn drop(&mut self) {
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed transient upload {}", self.path.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => warn!(
                "Failed to remove transient upload {}: {e}",
                self.path.display()
            ),
        }
    }
}

/// Persists the upload, extracts its text and removes the transient copy.
pub async fn extract_upload(upload_dir: &Path, file: &UploadedFile) -> Result<String, AppError> {
    let transient = TransientUpload::persist(upload_dir, file).await?;
    extraction::extract(transient.path(), &file.extension()).await
}

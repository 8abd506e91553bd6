//! Text Extractor: turns an uploaded PDF or DOCX into plain text.
//!
//! Parsing is CPU-bound and runs on the blocking pool; a panic inside a parser is reported
//! as an extraction failure rather than taking the request down.

mod docx;
mod pdf;

use std::path::Path;

use crate::config::ALLOWED_EXTENSIONS;
use crate::errors::AppError;

/// A document format the extractor can read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
}

impl DocumentFormat {
    /// Resolves a declared extension (`"pdf"`, `".PDF"`, ...) to a format.
    pub fn from_extension(extension: &str) -> Result<Self, AppError> {
        let normalized = extension.trim_start_matches('.').to_ascii_lowercase();
        match normalized.as_str() {
            "pdf" => Ok(Self::Pdf),
            "docx" => Ok(Self::Docx),
            _ => Err(unsupported(&normalized)),
        }
    }
}

/// `UnsupportedFormat` carrying the rejected extension in dotted form.
pub fn unsupported(extension: &str) -> AppError {
    if extension.is_empty() {
        AppError::UnsupportedFormat("(none)".to_string())
    } else {
        AppError::UnsupportedFormat(format!(".{}", extension.trim_start_matches('.')))
    }
}

/// Lowercased extension of a filename without the dot; empty when there is none.
pub fn extension_of(filename: &str) -> String {
    Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

pub fn is_supported(filename: &str) -> bool {
    ALLOWED_EXTENSIONS.contains(&extension_of(filename).as_str())
}

/// Extracts the text of the file at `path`, parsed according to `declared_extension`.
pub async fn extract(path: &Path, declared_extension: &str) -> Result<String, AppError> {
    let format = DocumentFormat::from_extension(declared_extension)?;

    let bytes = tokio::fs::read(path).await.map_err(|e| {
        AppError::ExtractionFailure(format!("Failed to read '{}': {e}", path.display()))
    })?;

    tokio::task::spawn_blocking(move || extract_bytes(format, &bytes))
        .await
        .map_err(|e| AppError::ExtractionFailure(format!("Document parser aborted: {e}")))?
}

/// Synchronous extraction from an in-memory document.
pub fn extract_bytes(format: DocumentFormat, bytes: &[u8]) -> Result<String, AppError> {
    match format {
        DocumentFormat::Pdf => pdf::extract_pdf_text(bytes),
        DocumentFormat::Docx => docx::extract_docx_text(bytes),
    }
}

/// True when extracted text carries nothing worth sending to the model.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

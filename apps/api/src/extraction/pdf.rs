use crate::errors::AppError;

/// Text of every page in document order, trimmed at both ends.
/// Pages without extractable text contribute nothing.
pub(super) fn extract_pdf_text(bytes: &[u8]) -> Result<String, AppError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| AppError::ExtractionFailure(format!("Error extracting PDF: {e}")))?;
    Ok(text.trim().to_string())
}

//! Axum route handler for PDF text extraction.

use axum::{extract::Multipart, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::extract::extract_text;

const FILE_FIELD: &str = "file";

#[derive(Debug, Serialize)]
pub struct ExtractTextResponse {
    pub text: String,
}

/// POST /api/extract-pdf-text
///
/// Multipart upload with a single `file` field holding a `.pdf`.
pub async fn handle_extract_pdf_text(
    mut multipart: Multipart,
) -> Result<Json<ExtractTextResponse>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field.file_name().unwrap_or_default().to_string();
        if filename.is_empty() {
            return Err(AppError::Validation("No file selected".to_string()));
        }
        if !filename.to_lowercase().ends_with(".pdf") {
            return Err(AppError::Validation("File must be a PDF".to_string()));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read upload: {e}")))?;

        tracing::info!(filename = %filename, size = bytes.len(), "Extracting PDF text");
        let text = extract_text(bytes).await?;
        return Ok(Json(ExtractTextResponse { text }));
    }

    Err(AppError::Validation("No file provided".to_string()))
}

//! Plain-text extraction from uploaded PDF resumes.
//!
//! `pdf-extract` is synchronous and can panic on malformed input, so extraction runs on the
//! blocking pool and a panicked task is reported as an ordinary extraction failure.

pub mod handlers;

use bytes::Bytes;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Could not read text from PDF: {0}")]
    Pdf(String),

    #[error("PDF could not be parsed")]
    Aborted,
}

/// Extracts the text of every page, in page order.
pub async fn extract_text(bytes: Bytes) -> Result<String, ExtractError> {
    let outcome = tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&bytes))
        .await
        .map_err(|e| {
            tracing::warn!("PDF extraction task aborted: {e}");
            ExtractError::Aborted
        })?;

    outcome.map_err(|e| ExtractError::Pdf(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_resume;
    use crate::resume::classify;

    #[tokio::test]
    async fn test_garbage_bytes_are_an_error() {
        let err = extract_text(Bytes::from_static(b"definitely not a pdf"))
            .await
            .unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_) | ExtractError::Aborted));
    }

    #[tokio::test]
    async fn test_rendered_resume_text_is_recoverable() {
        let doc = classify("Jane Doe\njane@example.com\nSKILLS\nRust and SQL");
        let bytes = render_resume(&doc).unwrap();
        let text = extract_text(Bytes::from(bytes)).await.unwrap();
        assert!(text.contains("Jane Doe"), "extracted: {text:?}");
        assert!(text.contains("SKILLS"));
    }
}

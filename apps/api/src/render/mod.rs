// PDF composers. `resume` lays out classified free text, `profile` lays out a structured
// profile. Both draw through `flow::Flow` onto a `canvas::PdfCanvas`.

pub mod canvas;
pub mod flow;
pub mod profile;
pub mod resume;
pub mod style;

use axum::{
    http::header,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::errors::AppError;

pub use profile::render_profile;
pub use resume::render_resume;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("PDF serialization failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs a CPU-bound render job off the async executor.
pub async fn render_blocking<F>(job: F) -> Result<Vec<u8>, AppError>
where
    F: FnOnce() -> Result<Vec<u8>, RenderError> + Send + 'static,
{
    let bytes = tokio::task::spawn_blocking(job)
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in render: {e}")))??;
    Ok(bytes)
}

/// Wraps rendered bytes as a downloadable `<stem>_resume.pdf`.
pub fn pdf_attachment(stem: &str, bytes: Vec<u8>) -> Response {
    let disposition = format!("attachment; filename=\"{}\"", attachment_filename(stem));
    (
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    )
        .into_response()
}

/// Spaces become underscores; anything that cannot sit inside a quoted header value
/// becomes an underscore as well.
pub fn attachment_filename(stem: &str) -> String {
    let stem: String = stem
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '"' | '\\' => '_',
            c if c.is_ascii_graphic() => c,
            _ => '_',
        })
        .collect();
    format!("{stem}_resume.pdf")
}

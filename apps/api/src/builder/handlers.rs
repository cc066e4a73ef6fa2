//! Axum route handler for the structured resume builder.

use axum::{response::Response, Json};

use crate::errors::AppError;
use crate::models::profile::ResumeProfile;
use crate::render::{pdf_attachment, render_blocking, render_profile};

/// POST /api/resumes/pdf
///
/// Renders the submitted profile and returns it as `<name>_resume.pdf`.
pub async fn handle_profile_pdf(
    Json(profile): Json<ResumeProfile>,
) -> Result<Response, AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("name cannot be empty".to_string()));
    }

    let stem = profile.name.trim().to_string();
    let bytes = render_blocking(move || render_profile(&profile)).await?;
    tracing::info!(name = %stem, size = bytes.len(), "Rendered profile PDF");

    Ok(pdf_attachment(&stem, bytes))
}

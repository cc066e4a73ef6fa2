//! Axum route handlers for resume polishing and text-to-PDF download.

use axum::{extract::State, response::Response, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::polish::polish_resume;
use crate::render::{pdf_attachment, render_blocking, render_resume};
use crate::resume::classify;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PolishRequest {
    pub position_name: String,
    pub resume_content: String,
    pub polish_prompt: Option<String>,
    pub output_format: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PolishResponse {
    pub polished_resume: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pdf_available: Option<bool>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct DownloadPdfRequest {
    pub resume_content: String,
    pub position_name: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/polish-resume
///
/// Returns the polished text. With `output_format: "pdf"` the response also flags that the
/// text can be sent on to `/api/download-resume-pdf`.
pub async fn handle_polish_resume(
    State(state): State<AppState>,
    Json(request): Json<PolishRequest>,
) -> Result<Json<PolishResponse>, AppError> {
    if request.position_name.trim().is_empty() || request.resume_content.trim().is_empty() {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let polished_resume = polish_resume(
        state.llm.as_ref(),
        &request.position_name,
        &request.resume_content,
        request.polish_prompt.as_deref(),
    )
    .await?;

    let pdf_available = (request.output_format.as_deref() == Some("pdf")).then_some(true);

    Ok(Json(PolishResponse {
        polished_resume,
        pdf_available,
    }))
}

/// POST /api/download-resume-pdf
///
/// Classifies the resume text and renders it as `<position_name>_resume.pdf`.
pub async fn handle_download_resume_pdf(
    Json(request): Json<DownloadPdfRequest>,
) -> Result<Response, AppError> {
    if request.resume_content.trim().is_empty() {
        return Err(AppError::Validation("Missing resume content".to_string()));
    }

    let DownloadPdfRequest {
        resume_content,
        position_name,
    } = request;

    let bytes = render_blocking(move || render_resume(&classify(&resume_content))).await?;
    tracing::info!(
        position = %position_name,
        size = bytes.len(),
        "Rendered resume PDF"
    );

    Ok(pdf_attachment(&position_name, bytes))
}

//! Axum route handler for cover letter generation.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::cover_letter::{generate_cover_letter, CoverLetterInput};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CoverLetterRequest {
    pub company_name: String,
    pub position_name: String,
    pub job_description: String,
    pub resume_content: String,
}

#[derive(Debug, Serialize)]
pub struct CoverLetterResponse {
    pub cover_letter: String,
}

/// POST /api/generate-cover-letter
pub async fn handle_generate_cover_letter(
    State(state): State<AppState>,
    Json(request): Json<CoverLetterRequest>,
) -> Result<Json<CoverLetterResponse>, AppError> {
    let input = CoverLetterInput {
        company_name: request.company_name.trim(),
        position_name: request.position_name.trim(),
        job_description: request.job_description.trim(),
        resume_content: request.resume_content.trim(),
    };

    let fields = [
        input.company_name,
        input.position_name,
        input.job_description,
        input.resume_content,
    ];
    if fields.iter().any(|f| f.is_empty()) {
        return Err(AppError::Validation("Missing required fields".to_string()));
    }

    let cover_letter = generate_cover_letter(state.llm.as_ref(), input).await?;

    Ok(Json(CoverLetterResponse { cover_letter }))
}

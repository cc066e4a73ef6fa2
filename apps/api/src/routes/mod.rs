pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::builder::handlers as builder;
use crate::cover_letter::handlers as cover_letter;
use crate::errors::AppError;
use crate::extract::handlers as extract;
use crate::polish::handlers as polish;
use crate::state::AppState;

/// Upper bound for request bodies, uploads included.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Text generation
        .route("/api/polish-resume", post(polish::handle_polish_resume))
        .route(
            "/api/generate-cover-letter",
            post(cover_letter::handle_generate_cover_letter),
        )
        // PDF in and out
        .route(
            "/api/download-resume-pdf",
            post(polish::handle_download_resume_pdf),
        )
        .route(
            "/api/extract-pdf-text",
            post(extract::handle_extract_pdf_text),
        )
        .route("/api/resumes/pdf", post(builder::handle_profile_pdf))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

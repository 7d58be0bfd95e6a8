pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::media::handlers as media;
use crate::resume::handlers as resume;
use crate::state::AppState;
use crate::text::handlers as text;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Text
        .route("/api/translate", post(text::handle_translate))
        .route("/api/summarize", post(text::handle_summarize))
        // Media
        .route("/api/analyze-image", post(media::handle_analyze_image))
        .route("/api/analyze-audio", post(media::handle_analyze_audio))
        // Resume
        .route(
            "/api/resume/generate-summary",
            post(resume::handle_generate_summary),
        )
        .route(
            "/api/resume/optimize-skills",
            post(resume::handle_optimize_skills),
        )
        .with_state(state)
}

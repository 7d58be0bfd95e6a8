use axum::{extract::State, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub text_model: String,
    pub vision_model: String,
}

/// GET /health
/// Liveness plus the model ids this process forwards to. Never calls the provider.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        text_model: state.config.text_model.clone(),
        vision_model: state.config.vision_model.clone(),
    })
}

//! Axum route handlers for the resume helpers.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::llm_client::{GenerationRequest, ModelClass};
use crate::resume::prompts::{generate_summary_prompt, optimize_skills_prompt};
use crate::state::AppState;
use crate::validation::field;

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GenerateSummaryRequest {
    pub existing_summary: Option<String>,
    pub role: Option<String>,
    pub experience_level: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateSummaryResponse {
    pub generated_summary: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OptimizeSkillsRequest {
    pub current_skills: Option<String>,
    pub job_description_keywords: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeSkillsResponse {
    pub optimized_skills: String,
}

/// POST /api/resume/generate-summary
pub async fn handle_generate_summary(
    State(state): State<AppState>,
    AppJson(request): AppJson<GenerateSummaryRequest>,
) -> Result<Json<GenerateSummaryResponse>, AppError> {
    info!("Generating resume summary");

    let prompt = generate_summary_prompt(
        field(&request.existing_summary),
        field(&request.role),
        field(&request.experience_level),
    );
    let result = state
        .llm
        .generate(
            &GenerationRequest::new("generate-resume-summary", prompt),
            ModelClass::Text,
        )
        .await
        .map_err(AppError::generation("Failed to generate resume summary"))?;

    Ok(Json(GenerateSummaryResponse {
        generated_summary: result.text,
    }))
}

/// POST /api/resume/optimize-skills
pub async fn handle_optimize_skills(
    State(state): State<AppState>,
    AppJson(request): AppJson<OptimizeSkillsRequest>,
) -> Result<Json<OptimizeSkillsResponse>, AppError> {
    info!("Optimizing resume skills");

    let prompt = optimize_skills_prompt(
        field(&request.current_skills),
        field(&request.job_description_keywords),
    );
    let result = state
        .llm
        .generate(
            &GenerationRequest::new("optimize-skills", prompt),
            ModelClass::Text,
        )
        .await
        .map_err(AppError::generation("Failed to optimize skills"))?;

    Ok(Json(OptimizeSkillsResponse {
        optimized_skills: result.text,
    }))
}

//! Axum route handlers for translation and summarization.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::llm_client::{GenerationRequest, ModelClass};
use crate::state::AppState;
use crate::text::prompts::{key_takeaways_prompt, translate_prompt};
use crate::text::summary::SummaryType;
use crate::validation::{field, require_fields};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TranslateRequest {
    pub text: Option<String>,
    pub from_lang: Option<String>,
    pub to_lang: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummarizeRequest {
    pub text: Option<String>,
    pub summary_type: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeResponse {
    pub summary: String,
    pub key_points: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/translate
pub async fn handle_translate(
    State(state): State<AppState>,
    AppJson(request): AppJson<TranslateRequest>,
) -> Result<Json<TranslateResponse>, AppError> {
    require_fields(&[
        ("text", request.text.as_deref()),
        ("fromLang", request.from_lang.as_deref()),
        ("toLang", request.to_lang.as_deref()),
    ])?;

    let from_lang = field(&request.from_lang);
    let to_lang = field(&request.to_lang);
    info!("Translating text from {from_lang} to {to_lang}");

    let prompt = translate_prompt(field(&request.text), from_lang, to_lang);
    let result = state
        .llm
        .generate(&GenerationRequest::new("translate", prompt), ModelClass::Text)
        .await
        .map_err(AppError::generation("Translation failed"))?;

    Ok(Json(TranslateResponse {
        translated_text: result.text,
    }))
}

/// POST /api/summarize
///
/// List-style summaries (`bullets`, `key`) double as the key points.
/// Every other style makes a second provider call for the key takeaways.
pub async fn handle_summarize(
    State(state): State<AppState>,
    AppJson(request): AppJson<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, AppError> {
    require_fields(&[
        ("text", request.text.as_deref()),
        ("summaryType", request.summary_type.as_deref()),
    ])?;

    let text = field(&request.text);
    let summary_type = SummaryType::parse(field(&request.summary_type));
    info!("Summarizing text ({summary_type:?})");

    let summary = state
        .llm
        .generate(
            &GenerationRequest::new("summarize", summary_type.prompt(text)),
            ModelClass::Text,
        )
        .await
        .map_err(AppError::generation("Summarization failed"))?
        .text;

    let key_points = if summary_type.is_list() {
        summary.clone()
    } else {
        state
            .llm
            .generate(
                &GenerationRequest::new("summarize-key-points", key_takeaways_prompt(text)),
                ModelClass::Text,
            )
            .await
            .map_err(AppError::generation("Summarization failed"))?
            .text
    };

    Ok(Json(SummarizeResponse {
        summary,
        key_points,
    }))
}

//! Axum route handlers for image and audio analysis.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::llm_client::{Attachment, GenerationRequest};
use crate::media::audio::simulate_analysis;
use crate::media::prompts::{DEFAULT_IMAGE_MIME_TYPE, DESCRIBE_IMAGE_PROMPT};
use crate::state::AppState;
use crate::validation::{field, require_fields};

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzeImageRequest {
    /// Base64 without a `data:` URI prefix.
    pub image_data: Option<String>,
    pub image_mime_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeImageResponse {
    pub description: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AnalyzeAudioRequest {
    pub audio_data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeAudioResponse {
    pub transcription: String,
    pub emotion: String,
}

/// POST /api/analyze-image
///
/// The declared MIME type is trusted as-is; the payload is not sniffed.
pub async fn handle_analyze_image(
    State(state): State<AppState>,
    AppJson(request): AppJson<AnalyzeImageRequest>,
) -> Result<Json<AnalyzeImageResponse>, AppError> {
    require_fields(&[("imageData", request.image_data.as_deref())])?;

    let mime_type = request
        .image_mime_type
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| DEFAULT_IMAGE_MIME_TYPE.to_string());
    info!("Analyzing image ({mime_type})");

    let generation = GenerationRequest::new("analyze-image", DESCRIBE_IMAGE_PROMPT.to_string())
        .with_attachment(Attachment {
            data: field(&request.image_data).to_string(),
            mime_type,
        });

    let result = state
        .llm
        .generate(&generation, generation.model_class())
        .await
        .map_err(AppError::generation("Image analysis failed"))?;

    Ok(Json(AnalyzeImageResponse {
        description: result.text,
    }))
}

/// POST /api/analyze-audio
///
/// Simulated: never touches the provider.
pub async fn handle_analyze_audio(
    AppJson(request): AppJson<AnalyzeAudioRequest>,
) -> Result<Json<AnalyzeAudioResponse>, AppError> {
    info!("Analyzing audio (simulated)");

    let analysis = simulate_analysis(request.audio_data.as_deref()).await;

    Ok(Json(AnalyzeAudioResponse {
        transcription: analysis.transcription.to_string(),
        emotion: analysis.emotion.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::stub::StubProvider;
    use crate::llm_client::ModelClass;
    use crate::media::audio::{SIMULATED_EMOTION, SIMULATED_TRANSCRIPTION};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_image_defaults_to_jpeg_and_uses_vision_model() {
        let stub = Arc::new(StubProvider::replying(&["A cat on a sofa."]));
        let state = AppState::for_test(stub.clone());

        let request = AnalyzeImageRequest {
            image_data: Some("/9j/4AAQ".to_string()),
            image_mime_type: None,
        };
        let Json(response) = handle_analyze_image(State(state), AppJson(request))
            .await
            .unwrap();

        assert_eq!(response.description, "A cat on a sofa.");
        let calls = stub.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, ModelClass::Vision);
        assert_eq!(calls[0].0.prompt, DESCRIBE_IMAGE_PROMPT);
        assert_eq!(
            calls[0].0.attachments,
            vec![Attachment {
                data: "/9j/4AAQ".to_string(),
                mime_type: "image/jpeg".to_string(),
            }]
        );
    }

    #[tokio::test]
    async fn test_image_declared_mime_type_is_trusted() {
        let stub = Arc::new(StubProvider::replying(&["A chart."]));
        let state = AppState::for_test(stub.clone());

        let request = AnalyzeImageRequest {
            image_data: Some("/9j/4AAQ".to_string()),
            image_mime_type: Some("image/png".to_string()),
        };
        handle_analyze_image(State(state), AppJson(request))
            .await
            .unwrap();

        assert_eq!(stub.calls()[0].0.attachments[0].mime_type, "image/png");
    }

    #[tokio::test]
    async fn test_image_missing_data_is_rejected() {
        let stub = Arc::new(StubProvider::replying(&["unused"]));
        let state = AppState::for_test(stub.clone());

        let err = handle_analyze_image(State(state), AppJson(AnalyzeImageRequest::default()))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(msg) if msg.contains("imageData")));
        assert_eq!(stub.call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_audio_returns_simulated_strings_without_data() {
        let Json(response) = handle_analyze_audio(AppJson(AnalyzeAudioRequest::default()))
            .await
            .unwrap();

        assert_eq!(response.transcription, SIMULATED_TRANSCRIPTION);
        assert_eq!(response.emotion, SIMULATED_EMOTION);
    }
}

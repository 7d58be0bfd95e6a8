/// LLM Client — the single point of entry for all generative-model calls in the relay.
///
/// ARCHITECTURAL RULE: No other module may call the provider API directly.
/// All generation goes through a `GenerationProvider`, and handlers only ever see
/// `GenerationRequest` / `GenerationResult`.
///
/// Generation config and safety policy are process-wide constants (see `gemini`).
use async_trait::async_trait;
use thiserror::Error;

pub mod gemini;
#[cfg(test)]
pub mod stub;

pub use gemini::GeminiClient;

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Response was blocked by the provider: {reason}")]
    Blocked { reason: String },

    #[error("Model returned empty content")]
    EmptyContent,

    /// Any other provider-side failure, carried as raw text.
    #[error("{0}")]
    Provider(String),
}

impl GenerationError {
    /// Upstream HTTP status, when the provider answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            GenerationError::Api { status, .. } => Some(*status),
            GenerationError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Which model variant serves a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelClass {
    /// Lightweight model for text-only prompts.
    Text,
    /// Vision-capable model, required once an image is attached.
    Vision,
}

/// Inline media sent alongside the prompt. `data` stays base64 as received.
#[derive(Debug, Clone, PartialEq)]
pub struct Attachment {
    pub data: String,
    pub mime_type: String,
}

/// Provider-agnostic generation request built by the per-operation prompt builders.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// Operation label carried into logs (e.g. "translate").
    pub operation: &'static str,
    pub prompt: String,
    pub attachments: Vec<Attachment>,
}

impl GenerationRequest {
    pub fn new(operation: &'static str, prompt: String) -> Self {
        Self {
            operation,
            prompt,
            attachments: Vec::new(),
        }
    }

    pub fn with_attachment(mut self, attachment: Attachment) -> Self {
        self.attachments.push(attachment);
        self
    }

    /// Vision when anything is attached, text otherwise.
    pub fn model_class(&self) -> ModelClass {
        if self.attachments.is_empty() {
            ModelClass::Text
        } else {
            ModelClass::Vision
        }
    }
}

/// Model output with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationResult {
    pub text: String,
}

impl GenerationResult {
    pub fn new(raw: &str) -> Self {
        Self {
            text: raw.trim().to_string(),
        }
    }
}

/// The seam to the external generative-AI service.
///
/// Implementations make exactly one outbound call per `generate` and never retry;
/// failures propagate to the handler unchanged.
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(
        &self,
        request: &GenerationRequest,
        model: ModelClass,
    ) -> Result<GenerationResult, GenerationError>;
}

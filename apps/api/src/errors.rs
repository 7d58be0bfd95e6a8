use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::llm_client::GenerationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// Client supplied insufficient input. Never reaches the provider.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider call failed. `message` is the user-facing summary for the operation.
    #[error("{message}: {source}")]
    Generation {
        message: &'static str,
        #[source]
        source: GenerationError,
    },

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Adapter for `map_err` that tags a provider failure with the operation's message.
    pub fn generation(message: &'static str) -> impl FnOnce(GenerationError) -> AppError {
        move |source| AppError::Generation { message, source }
    }
}

/// Uniform error body: `{"error": ..., "details": ...}`.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope {
                    error: msg,
                    details: None,
                },
            ),
            AppError::Generation { message, source } => {
                tracing::error!(upstream_status = ?source.status(), "{message}: {source}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope {
                        error: message.to_string(),
                        details: Some(source.to_string()),
                    },
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorEnvelope {
                        error: "An internal server error occurred".to_string(),
                        details: Some(e.to_string()),
                    },
                )
            }
        };

        (status, Json(envelope)).into_response()
    }
}

//! JSON body extractor whose rejections render through `AppError`.

use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::errors::AppError;

/// Drop-in for `axum::Json` on request bodies. Malformed JSON, a missing
/// content type, or a wrongly typed field becomes a 400 with the error envelope.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

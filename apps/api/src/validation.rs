//! Required-field presence checks shared by the handlers.
//!
//! Presence only: values are never trimmed, normalised, or coerced before they
//! reach a prompt template.

use crate::errors::AppError;

/// Fails with `AppError::Validation` naming every absent or empty field, in the order given.
pub fn require_fields(fields: &[(&str, Option<&str>)]) -> Result<(), AppError> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.map_or(true, str::is_empty))
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(format!(
            "Missing required fields: {}",
            missing.join(", ")
        )))
    }
}

/// Unwraps a field already checked by `require_fields`.
pub fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or_default()
}

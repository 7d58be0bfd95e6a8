/// Instruction paired with the uploaded image.
pub const DESCRIBE_IMAGE_PROMPT: &str = "Describe this image in 2-3 sentences. \
    Focus on the main subjects, the setting, and any notable details.";

/// MIME type assumed when the client does not declare one.
pub const DEFAULT_IMAGE_MIME_TYPE: &str = "image/jpeg";

use anyhow::{Context, Result};

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_TEXT_MODEL: &str = "gemini-1.5-flash";
const DEFAULT_VISION_MODEL: &str = "gemini-1.5-flash";

/// Application configuration loaded from environment variables.
/// Startup fails if the provider credential is missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: String,
    pub gemini_api_base: String,
    pub text_model: String,
    pub vision_model: String,
    pub port: u16,
    pub body_limit_mb: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            gemini_api_base: optional_env("GEMINI_API_BASE", DEFAULT_API_BASE),
            text_model: optional_env("GEMINI_TEXT_MODEL", DEFAULT_TEXT_MODEL),
            vision_model: optional_env("GEMINI_VISION_MODEL", DEFAULT_VISION_MODEL),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            body_limit_mb: std::env::var("BODY_LIMIT_MB")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<usize>()
                .context("BODY_LIMIT_MB must be a whole number of megabytes")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }

    /// Request body ceiling in bytes. Sized for base64 images embedded in JSON.
    pub fn body_limit_bytes(&self) -> usize {
        self.body_limit_mb * 1024 * 1024
    }
}

fn require_env(key: &str) -> Result<String> {
    let value = std::env::var(key)
        .with_context(|| format!("Required environment variable '{key}' is not set"))?;
    if value.trim().is_empty() {
        anyhow::bail!("Required environment variable '{key}' is empty");
    }
    Ok(value)
}

fn optional_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
impl Config {
    /// Configuration for router tests; never reaches the network.
    pub fn for_test() -> Self {
        Config {
            gemini_api_key: "test-key".to_string(),
            gemini_api_base: DEFAULT_API_BASE.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            vision_model: DEFAULT_VISION_MODEL.to_string(),
            port: 5000,
            body_limit_mb: 10,
            rust_log: "info".to_string(),
        }
    }
}

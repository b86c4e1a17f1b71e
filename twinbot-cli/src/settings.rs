//! LLM settings from environment variables.
//!
//! A missing OPENAI_API_KEY is not an error: it means AI is disabled and the
//! policy runs in permanent fallback mode, decided once at startup.

use std::env;
use twinbot_agent::VerdictProtocol;

/// Completion endpoint and classifier settings.
#[derive(Debug, Clone)]
pub struct LlmSettings {
    /// None = AI disabled, fallback-only.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub classifier_model: String,
    pub classifier_enabled: bool,
    pub classifier_protocol: VerdictProtocol,
}

impl LlmSettings {
    /// Reads OPENAI_API_KEY, OPENAI_BASE_URL, MODEL, CLASSIFIER_MODEL,
    /// CLASSIFIER_ENABLED, CLASSIFIER_PROTOCOL with DeepSeek-friendly defaults.
    pub fn from_env() -> Self {
        let api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let base_url = env::var("OPENAI_BASE_URL")
            .unwrap_or_else(|_| "https://api.deepseek.com/v1".to_string());
        let model = env::var("MODEL").unwrap_or_else(|_| "deepseek-chat".to_string());
        let classifier_model = env::var("CLASSIFIER_MODEL").unwrap_or_else(|_| model.clone());
        let classifier_enabled = env::var("CLASSIFIER_ENABLED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);
        let classifier_protocol = match env::var("CLASSIFIER_PROTOCOL").as_deref() {
            Ok("json") => VerdictProtocol::Structured,
            _ => VerdictProtocol::FreeText,
        };
        Self {
            api_key,
            base_url,
            model,
            classifier_model,
            classifier_enabled,
            classifier_protocol,
        }
    }
}

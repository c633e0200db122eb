pub mod languages;
pub mod prompt;

use serde::{Deserialize, Serialize};

/// Sentinel the demo page seeds both dropdowns with before the user
/// picks a language.
pub const PLACEHOLDER_LANGUAGE: &str = "Select one";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateRequest {
    #[serde(default)]
    pub source_text: String,
    #[serde(default)]
    pub source_language: String,
    #[serde(default)]
    pub target_language: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub original: String,
    pub translated: String,
    pub source_language: String,
    pub target_language: String,
}

/// Check a request before any outbound call is made.
/// Whitespace-only text counts as empty.
pub fn validate(request: &TranslateRequest) -> Result<(), String> {
    if request.source_text.trim().is_empty() {
        return Err("source_text must not be empty".to_string());
    }
    if request.source_language.is_empty() {
        return Err("source_language must not be empty".to_string());
    }
    if request.target_language.is_empty() {
        return Err("target_language must not be empty".to_string());
    }
    if request.source_language == PLACEHOLDER_LANGUAGE {
        return Err("source_language has not been selected".to_string());
    }
    if request.target_language == PLACEHOLDER_LANGUAGE {
        return Err("target_language has not been selected".to_string());
    }
    Ok(())
}

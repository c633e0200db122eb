use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub system: SystemConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub base_url: String,
    #[serde(default)]
    pub api_key: String,
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    12801
}

fn default_max_tokens() -> u32 {
    1000
}

// Low temperature biases the model toward repeatable phrasing
fn default_temperature() -> f32 {
    0.3
}

fn default_timeout_secs() -> u64 {
    30
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)?;

        // Determine file type by extension
        let path_lower = path.to_lowercase();
        let mut config: Config = if path_lower.ends_with(".json") {
            serde_json::from_str(&content)?
        } else {
            serde_yaml::from_str(&content)?
        };

        // Credentials are supplied externally; the env var wins over the file
        if let Ok(api_key) = std::env::var("TRANSLATOR_API_KEY") {
            config.llm.api_key = api_key;
        }

        Ok(config)
    }

    /// Reject unusable LLM settings at startup rather than per request.
    pub fn validate(&self) -> Result<()> {
        if self.llm.base_url.trim().is_empty() {
            anyhow::bail!("llm.base_url must not be empty");
        }
        if self.llm.api_key.trim().is_empty() {
            anyhow::bail!("llm.api_key must not be empty (set it in the config file or via TRANSLATOR_API_KEY)");
        }
        if self.llm.model.trim().is_empty() {
            anyhow::bail!("llm.model must not be empty");
        }
        Ok(())
    }
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            api_key: String::new(),
            model: String::new(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_config() -> Config {
        Config {
            system: SystemConfig::default(),
            llm: LlmConfig {
                base_url: "https://api.openai.com/v1".to_string(),
                api_key: "sk-test".to_string(),
                model: "gpt-4".to_string(),
                ..LlmConfig::default()
            },
        }
    }

    #[test]
    fn validate_accepts_complete_config() {
        assert!(valid_config().validate().is_ok());
    }

    #[test]
    fn validate_rejects_missing_api_key() {
        let mut config = valid_config();
        config.llm.api_key = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_model() {
        let mut config = valid_config();
        config.llm.model = "  ".to_string();
        assert!(config.validate().is_err());
    }
}

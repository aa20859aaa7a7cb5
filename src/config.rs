use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Main AI configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct AiConfig {
    /// Remote completion settings
    #[serde(default)]
    pub completion: CompletionConfig,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            completion: CompletionConfig::default(),
            timeout: default_timeout(),
        }
    }
}

/// Configuration for the remote completion provider
#[derive(Debug, Deserialize, Clone)]
pub struct CompletionConfig {
    /// Whether the remote completion path is enabled at all
    #[serde(default)]
    pub enabled: bool,
    /// Model identifier (e.g., "gpt-3.5-turbo")
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// API key for authentication (can also be set via environment variable)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    pub base_url: Option<String>,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            api_key: None,
            base_url: None,
        }
    }
}

// Default value functions
fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    1000
}

fn default_timeout() -> u64 {
    30
}

impl AiConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPES__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPES__COMPLETION__API_KEY
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            // Use double underscore for nested: RECIPES__COMPLETION__API_KEY
            .add_source(
                Environment::with_prefix("RECIPES")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        assert_eq!(default_model(), "gpt-3.5-turbo");
        assert_eq!(default_temperature(), 0.7);
        assert_eq!(default_max_tokens(), 1000);
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_completion_config_default_is_disabled() {
        let config = CompletionConfig::default();
        assert!(!config.enabled);
        assert!(config.api_key.is_none());
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_ai_config_default() {
        let config = AiConfig::default();
        assert_eq!(config.timeout, 30);
        assert_eq!(config.completion.model, "gpt-3.5-turbo");
    }
}

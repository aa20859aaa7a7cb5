use log::{info, warn};

use crate::config::AiConfig;
use crate::engine;
use crate::error::SuggestError;
use crate::model::{Filters, Recipe};
use crate::providers::{OpenAiProvider, SuggestionProvider};

/// Suggestion front door: tries the remote completion provider when one is
/// configured and always substitutes the local engine's output when the
/// remote path fails for any reason.
///
/// Both paths return the same `Vec<Recipe>` shape, so callers cannot tell
/// which one answered. Filter validation errors are the caller's fault and
/// are never absorbed.
pub struct Suggester {
    remote: Option<Box<dyn SuggestionProvider>>,
}

impl Suggester {
    /// A local-only suggester; never touches the network.
    pub fn new() -> Self {
        Suggester { remote: None }
    }

    /// Build a suggester from configuration.
    ///
    /// When the completion path is disabled or cannot be initialized (for
    /// example, no API key anywhere), the suggester degrades to local-only
    /// rather than failing; the engine is always available.
    pub fn from_config(config: &AiConfig) -> Self {
        if !config.completion.enabled {
            return Suggester::new();
        }
        match OpenAiProvider::new(&config.completion, config.timeout) {
            Ok(provider) => {
                info!("remote completion provider enabled");
                Suggester {
                    remote: Some(Box::new(provider)),
                }
            }
            Err(e) => {
                warn!("completion provider unavailable, using local suggestions only: {e}");
                Suggester::new()
            }
        }
    }

    /// Use a specific remote provider (primarily for tests).
    pub fn with_provider(provider: Box<dyn SuggestionProvider>) -> Self {
        Suggester {
            remote: Some(provider),
        }
    }

    /// Produce suggestions, preferring the remote provider.
    pub async fn suggest(
        &self,
        ingredients: &[String],
        filters: &Filters,
    ) -> Result<Vec<Recipe>, SuggestError> {
        // Validate before going remote so bad filters surface either way
        let filter_set = filters.parse()?;

        if let Some(remote) = &self.remote {
            match remote.suggest(ingredients, filters).await {
                Ok(recipes) => {
                    info!(
                        "got {} suggestions from {}",
                        recipes.len(),
                        remote.provider_name()
                    );
                    return Ok(recipes);
                }
                Err(e) => {
                    warn!(
                        "provider {} failed, falling back to local suggestions: {e}",
                        remote.provider_name()
                    );
                }
            }
        }

        Ok(engine::suggest_filtered(ingredients, &filter_set))
    }
}

impl Default for Suggester {
    fn default() -> Self {
        Suggester::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CompletionConfig;
    use crate::templates::TEMPLATES;
    use async_trait::async_trait;

    struct FailingProvider;

    #[async_trait]
    impl SuggestionProvider for FailingProvider {
        fn provider_name(&self) -> &str {
            "failing"
        }

        async fn suggest(
            &self,
            _ingredients: &[String],
            _filters: &Filters,
        ) -> Result<Vec<Recipe>, SuggestError> {
            Err(SuggestError::MalformedCompletion("boom".to_string()))
        }
    }

    struct CannedProvider(Vec<Recipe>);

    #[async_trait]
    impl SuggestionProvider for CannedProvider {
        fn provider_name(&self) -> &str {
            "canned"
        }

        async fn suggest(
            &self,
            _ingredients: &[String],
            _filters: &Filters,
        ) -> Result<Vec<Recipe>, SuggestError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn test_local_only_suggester_uses_engine() {
        let suggester = Suggester::new();
        let recipes = suggester.suggest(&[], &Filters::any()).await.unwrap();
        assert_eq!(recipes.len(), TEMPLATES.len());
    }

    #[tokio::test]
    async fn test_remote_failure_falls_back_to_engine() {
        let suggester = Suggester::with_provider(Box::new(FailingProvider));
        let recipes = suggester.suggest(&[], &Filters::any()).await.unwrap();
        assert_eq!(recipes.len(), TEMPLATES.len());
        assert_eq!(recipes[0].id, "recipe-0");
    }

    #[tokio::test]
    async fn test_remote_success_is_returned_as_is() {
        let canned = vec![TEMPLATES[1].instantiate("recipe-0")];
        let suggester = Suggester::with_provider(Box::new(CannedProvider(canned.clone())));
        let recipes = suggester.suggest(&[], &Filters::any()).await.unwrap();
        assert_eq!(recipes, canned);
    }

    #[tokio::test]
    async fn test_invalid_filters_are_not_absorbed() {
        let suggester = Suggester::with_provider(Box::new(CannedProvider(vec![])));
        let filters = Filters {
            cooking_time: "whenever".to_string(),
            ..Filters::any()
        };
        let result = suggester.suggest(&[], &filters).await;
        assert!(matches!(result, Err(SuggestError::InvalidFilter(_))));
    }

    #[tokio::test]
    async fn test_disabled_completion_config_is_local_only() {
        let config = AiConfig::default();
        let suggester = Suggester::from_config(&config);
        assert!(suggester.remote.is_none());
    }

    #[tokio::test]
    async fn test_enabled_completion_with_key_builds_provider() {
        let config = AiConfig {
            completion: CompletionConfig {
                enabled: true,
                api_key: Some("test-key".to_string()),
                ..CompletionConfig::default()
            },
            ..AiConfig::default()
        };
        let suggester = Suggester::from_config(&config);
        assert!(suggester.remote.is_some());
    }
}

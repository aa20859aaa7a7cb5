use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};

use crate::config::CompletionConfig;
use crate::error::SuggestError;
use crate::model::{Filters, Recipe};
use crate::providers::prompt::build_user_message;
use crate::providers::{SuggestionProvider, RECIPE_SUGGESTION_PROMPT};

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider from configuration
    ///
    /// Fails with [`SuggestError::MissingCredential`] when neither the
    /// config nor the `OPENAI_API_KEY` environment variable carries a key;
    /// without a credential the remote path can never succeed.
    pub fn new(config: &CompletionConfig, timeout: u64) -> Result<Self, SuggestError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or(SuggestError::MissingCredential)?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| "https://api.openai.com".to_string());

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout))
            .build()?;

        Ok(OpenAiProvider {
            client,
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAiProvider {
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 1000,
        }
    }
}

#[async_trait]
impl SuggestionProvider for OpenAiProvider {
    fn provider_name(&self) -> &str {
        "openai"
    }

    async fn suggest(
        &self,
        ingredients: &[String],
        filters: &Filters,
    ) -> Result<Vec<Recipe>, SuggestError> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "system", "content": RECIPE_SUGGESTION_PROMPT},
                    {"role": "user", "content": build_user_message(ingredients, filters)}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?
            .error_for_status()?;

        let response_body: Value = response.json().await?;
        debug!("{:?}", response_body);

        let content = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                SuggestError::MalformedCompletion(
                    "no message content in completion response".to_string(),
                )
            })?;

        let mut recipes: Vec<Recipe> = serde_json::from_str(content).map_err(|e| {
            SuggestError::MalformedCompletion(format!("content is not a recipe list: {e}"))
        })?;

        // Model-chosen ids are not trusted to be unique; reassign locally
        for (index, recipe) in recipes.iter_mut().enumerate() {
            recipe.id = format!("recipe-{index}");
        }

        Ok(recipes)
    }
}

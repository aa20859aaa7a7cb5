mod fallback;
mod open_ai;
mod prompt;

pub use fallback::Suggester;
pub use open_ai::OpenAiProvider;
pub use prompt::RECIPE_SUGGESTION_PROMPT;

use async_trait::async_trait;

use crate::error::SuggestError;
use crate::model::{Filters, Recipe};

/// Unified trait for remote suggestion providers
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Produce recipe suggestions for the given ingredients and filters
    async fn suggest(
        &self,
        ingredients: &[String],
        filters: &Filters,
    ) -> Result<Vec<Recipe>, SuggestError>;
}

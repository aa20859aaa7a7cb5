use crate::model::Filters;

/// The system prompt used when asking a completion endpoint for recipe
/// suggestions.
///
/// The prompt instructs the model to answer with a bare JSON array of
/// recipe objects in the same shape as [`crate::Recipe`], so the response
/// can be deserialized directly.
///
/// The prompt is loaded from `prompt.txt` at compile time using the
/// `include_str!` macro, making it easy to edit without dealing with
/// Rust string syntax.
pub const RECIPE_SUGGESTION_PROMPT: &str = include_str!("prompt.txt");

/// Build the user message carrying the caller's ingredients and filters.
pub fn build_user_message(ingredients: &[String], filters: &Filters) -> String {
    let listed = if ingredients.is_empty() {
        "(none)".to_string()
    } else {
        ingredients.join(", ")
    };
    format!(
        "Ingredients on hand: {}\nFilters: cookingTime={}, diet={}, cuisine={}",
        listed, filters.cooking_time, filters.diet, filters.cuisine
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_is_embedded() {
        // Verify the prompt is not empty
        assert!(!RECIPE_SUGGESTION_PROMPT.is_empty());

        // Verify it pins down the response shape
        assert!(RECIPE_SUGGESTION_PROMPT.contains("JSON array"));
        assert!(RECIPE_SUGGESTION_PROMPT.contains("cookingTime"));
        assert!(RECIPE_SUGGESTION_PROMPT.contains("imageUrl"));
    }

    #[test]
    fn test_prompt_contains_example() {
        assert!(RECIPE_SUGGESTION_PROMPT.contains("Example"));
        assert!(RECIPE_SUGGESTION_PROMPT.contains("suggestion-1"));
    }

    #[test]
    fn test_user_message_lists_ingredients_and_filters() {
        let filters = Filters {
            cooking_time: "30".to_string(),
            diet: "vegan".to_string(),
            cuisine: "any".to_string(),
        };
        let message =
            build_user_message(&["chicken".to_string(), "rice".to_string()], &filters);
        assert!(message.contains("chicken, rice"));
        assert!(message.contains("cookingTime=30"));
        assert!(message.contains("diet=vegan"));
    }

    #[test]
    fn test_user_message_handles_empty_ingredients() {
        let message = build_user_message(&[], &Filters::any());
        assert!(message.contains("(none)"));
    }
}

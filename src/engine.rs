//! The local suggestion pipeline: classify, customize each template,
//! filter, and fall back to a single force-fitted recipe when nothing
//! survives. Pure and synchronous; every call works on fresh copies of the
//! constant template data.

use log::debug;

use crate::classifier::{classify, Classified};
use crate::customize::customize;
use crate::error::SuggestError;
use crate::model::{FilterSet, Filters, Recipe};
use crate::templates::TEMPLATES;

/// Produce recipe suggestions for the given ingredients and raw filters.
///
/// The only error is filter validation; past that point the pipeline is
/// total and never returns an empty list.
pub fn suggest(ingredients: &[String], filters: &Filters) -> Result<Vec<Recipe>, SuggestError> {
    let filters = filters.parse()?;
    Ok(suggest_filtered(ingredients, &filters))
}

/// Suggestion pipeline over already-validated filters.
pub fn suggest_filtered(ingredients: &[String], filters: &FilterSet) -> Vec<Recipe> {
    let groups = classify(ingredients);

    let mut recipes = Vec::with_capacity(TEMPLATES.len());
    for (index, template) in TEMPLATES.iter().enumerate() {
        let mut draft = template.instantiate(format!("recipe-{index}"));
        customize(&mut draft, &groups);
        if filters.matches(&draft) {
            recipes.push(draft);
        }
    }

    if recipes.is_empty() {
        debug!("no template satisfied the filters, force-fitting a fallback recipe");
        recipes.push(fallback_recipe(&groups, filters));
    }
    recipes
}

/// Build the single best-effort recipe returned when filtering empties the
/// result: the first template, customized, then force-fitted to each
/// configured filter. The cooking-time force-fit lands 5 minutes under the
/// bound, floored at 1 minute.
fn fallback_recipe(groups: &Classified, filters: &FilterSet) -> Recipe {
    let mut recipe = TEMPLATES[0].instantiate("fallback-recipe");
    customize(&mut recipe, groups);

    if let Some(bound) = filters.cooking_time {
        recipe.cooking_time = bound.saturating_sub(5).max(1);
    }
    if let Some(diet) = &filters.diet {
        recipe.diet = vec![diet.clone()];
    }
    if let Some(cuisine) = &filters.cuisine {
        // Literal filter string, not case-normalized
        recipe.cuisine = cuisine.clone();
    }
    recipe
}

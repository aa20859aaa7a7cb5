//! Rewrites a template-derived draft recipe around the caller's classified
//! ingredients. All rules run unconditionally, in a fixed order, with no
//! early exit.

use std::collections::HashSet;

use crate::classifier::Classified;
use crate::model::Recipe;

/// Proteins whose presence strips the vegetarian and vegan tags.
const MEAT_PROTEINS: &[&str] = &["chicken", "beef", "pork", "fish", "shrimp"];

/// Proteins that add 10 minutes of cooking time.
const SLOW_PROTEINS: &[&str] = &["chicken", "beef"];

/// Customize a draft recipe in place.
///
/// Only the four classified groups drive customization; ingredients outside
/// every vocabulary do not contribute content. The rules, in order: title
/// and description rewrite, ingredient merge with dedup, protein and
/// vegetable instruction insertion, cooking-time adjustment, diet
/// adjustment.
pub fn customize(recipe: &mut Recipe, groups: &Classified) {
    rewrite_title(recipe, groups);
    rewrite_description(recipe, groups);
    merge_ingredients(recipe, groups);
    insert_instructions(recipe, groups);
    adjust_cooking_time(recipe, groups);
    adjust_diet(recipe, groups);
}

/// Prefix the title with the first protein and/or first vegetable.
fn rewrite_title(recipe: &mut Recipe, groups: &Classified) {
    let prefix = match (groups.proteins.first(), groups.vegetables.first()) {
        (Some(protein), Some(vegetable)) => {
            Some(format!("{} with {} ", capitalize(protein), capitalize(vegetable)))
        }
        (Some(protein), None) => Some(format!("{} ", capitalize(protein))),
        (None, Some(vegetable)) => Some(format!("{} ", capitalize(vegetable))),
        (None, None) => None,
    };
    if let Some(prefix) = prefix {
        recipe.title.insert_str(0, &prefix);
    }
}

/// Feature up to three ingredients in the description, proteins first.
fn rewrite_description(recipe: &mut Recipe, groups: &Classified) {
    let featured: Vec<&str> = groups
        .proteins
        .iter()
        .chain(groups.vegetables.iter())
        .take(3)
        .map(String::as_str)
        .collect();
    if !featured.is_empty() {
        recipe.description = format!("A delicious dish featuring {}.", featured.join(", "));
    }
}

/// Append the classified groups to the base ingredients, then dedup by
/// exact string, keeping the first occurrence.
fn merge_ingredients(recipe: &mut Recipe, groups: &Classified) {
    recipe.ingredients.extend(groups.proteins.iter().cloned());
    recipe.ingredients.extend(groups.vegetables.iter().cloned());
    recipe.ingredients.extend(groups.starches.iter().cloned());
    recipe.ingredients.extend(groups.dairy.iter().cloned());

    let mut seen = HashSet::new();
    recipe.ingredients.retain(|item| seen.insert(item.clone()));
}

/// Insert a protein step after the first instruction, then a vegetable step
/// after that. Insertion points clamp to the current instruction count.
fn insert_instructions(recipe: &mut Recipe, groups: &Classified) {
    if let Some(protein) = groups.proteins.first() {
        let step = format!("Cook {} until done.", protein);
        let at = recipe.instructions.len().min(1);
        recipe.instructions.insert(at, step);
    }
    if !groups.vegetables.is_empty() {
        let step = format!(
            "Add {} and cook until tender.",
            groups.vegetables.join(", ")
        );
        let at = recipe.instructions.len().min(2);
        recipe.instructions.insert(at, step);
    }
}

/// Slow proteins add 10 minutes; a meatless dish with vegetables saves 5.
/// The two adjustments are mutually exclusive, slow protein wins.
fn adjust_cooking_time(recipe: &mut Recipe, groups: &Classified) {
    let has_slow_protein = groups
        .proteins
        .iter()
        .any(|p| SLOW_PROTEINS.contains(&p.to_lowercase().as_str()));

    if has_slow_protein {
        recipe.cooking_time += 10;
    } else if groups.proteins.is_empty() && !groups.vegetables.is_empty() {
        recipe.cooking_time = recipe.cooking_time.saturating_sub(5);
    }
}

/// Meat strips "vegetarian" and "vegan"; dairy strips "vegan".
fn adjust_diet(recipe: &mut Recipe, groups: &Classified) {
    let has_meat = groups
        .proteins
        .iter()
        .any(|p| MEAT_PROTEINS.contains(&p.to_lowercase().as_str()));

    if has_meat {
        recipe.diet.retain(|tag| tag != "vegetarian" && tag != "vegan");
    }
    if !groups.dairy.is_empty() {
        recipe.diet.retain(|tag| tag != "vegan");
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

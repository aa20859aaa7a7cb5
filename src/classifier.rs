//! Partitions raw ingredient strings into protein/vegetable/starch/dairy
//! groups by case-insensitive vocabulary membership.

/// Protein vocabulary, lower-case canonical forms.
pub const PROTEINS: &[&str] = &["chicken", "beef", "pork", "fish", "shrimp", "tofu", "eggs"];

/// Vegetable vocabulary.
pub const VEGETABLES: &[&str] = &[
    "broccoli",
    "carrots",
    "spinach",
    "tomatoes",
    "onions",
    "garlic",
    "peppers",
    "lettuce",
    "mushrooms",
    "zucchini",
];

/// Starch vocabulary.
pub const STARCHES: &[&str] = &["rice", "pasta", "noodles", "potatoes", "bread", "quinoa"];

/// Dairy vocabulary.
pub const DAIRY: &[&str] = &["cheese", "milk", "butter", "yogurt", "cream"];

/// Ingredients grouped by vocabulary, each group in the caller's original
/// order and carrying the caller's original spelling.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classified {
    pub proteins: Vec<String>,
    pub vegetables: Vec<String>,
    pub starches: Vec<String>,
    pub dairy: Vec<String>,
}

impl Classified {
    pub fn is_empty(&self) -> bool {
        self.proteins.is_empty()
            && self.vegetables.is_empty()
            && self.starches.is_empty()
            && self.dairy.is_empty()
    }
}

/// Classify raw ingredient strings into the four fixed groups.
///
/// Membership is tested per category on the lower-cased form of each
/// ingredient; an ingredient matching no vocabulary lands in no group.
/// Pure function, no side effects.
pub fn classify(ingredients: &[String]) -> Classified {
    Classified {
        proteins: members_of(ingredients, PROTEINS),
        vegetables: members_of(ingredients, VEGETABLES),
        starches: members_of(ingredients, STARCHES),
        dairy: members_of(ingredients, DAIRY),
    }
}

fn members_of(ingredients: &[String], vocabulary: &[&str]) -> Vec<String> {
    ingredients
        .iter()
        .filter(|ingredient| vocabulary.contains(&ingredient.to_lowercase().as_str()))
        .cloned()
        .collect()
}

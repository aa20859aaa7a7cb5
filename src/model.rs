use serde::{Deserialize, Serialize};

use crate::error::SuggestError;

/// Sentinel filter value meaning "no constraint on this dimension".
pub const ANY: &str = "any";

/// A fully constructed recipe suggestion.
///
/// Field names serialize in camelCase so the output matches the shape the
/// completion endpoint is prompted to produce (`cookingTime`, `imageUrl`).
/// A `Recipe` is mutated in place while it is a draft inside one suggestion
/// pass and never after it has been returned to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique within one response, not globally persistent
    pub id: String,
    pub title: String,
    pub description: String,
    /// Deduplicated, first occurrence wins
    pub ingredients: Vec<String>,
    /// Order-significant, this is a procedure
    pub instructions: Vec<String>,
    /// Minutes, always > 0 on a returned recipe
    pub cooking_time: u32,
    pub diet: Vec<String>,
    pub cuisine: String,
    pub image_url: String,
}

/// Filter configuration exactly as the caller supplies it.
///
/// Each field is either the literal string `"any"` or a constraint value;
/// `cooking_time` constraints are string-encoded positive integers. Parse
/// into a [`FilterSet`] before filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Filters {
    pub cooking_time: String,
    pub diet: String,
    pub cuisine: String,
}

impl Default for Filters {
    fn default() -> Self {
        Filters::any()
    }
}

impl Filters {
    /// Filters with no constraint on any dimension.
    pub fn any() -> Self {
        Filters {
            cooking_time: ANY.to_string(),
            diet: ANY.to_string(),
            cuisine: ANY.to_string(),
        }
    }

    /// Validate the raw filter strings into a [`FilterSet`].
    ///
    /// A non-numeric, non-`"any"` cooking-time string is rejected with
    /// [`SuggestError::InvalidFilter`] rather than silently comparing
    /// against an invalid number. Zero is rejected too; the bound must be
    /// a positive number of minutes.
    pub fn parse(&self) -> Result<FilterSet, SuggestError> {
        let cooking_time = if self.cooking_time == ANY {
            None
        } else {
            let bound: u32 = self.cooking_time.trim().parse().map_err(|_| {
                SuggestError::InvalidFilter(format!(
                    "cookingTime must be \"any\" or a positive integer, got {:?}",
                    self.cooking_time
                ))
            })?;
            if bound == 0 {
                return Err(SuggestError::InvalidFilter(
                    "cookingTime bound must be greater than zero".to_string(),
                ));
            }
            Some(bound)
        };

        let diet = if self.diet == ANY {
            None
        } else {
            Some(self.diet.clone())
        };

        let cuisine = if self.cuisine == ANY {
            None
        } else {
            Some(self.cuisine.clone())
        };

        Ok(FilterSet {
            cooking_time,
            diet,
            cuisine,
        })
    }
}

/// Validated filter configuration; `None` encodes the `"any"` sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSet {
    /// Inclusive upper bound in minutes
    pub cooking_time: Option<u32>,
    /// Tag the recipe's diet set must contain (exact match)
    pub diet: Option<String>,
    /// Cuisine label, matched case-insensitively
    pub cuisine: Option<String>,
}

impl FilterSet {
    /// Whether a recipe satisfies every configured constraint.
    pub fn matches(&self, recipe: &Recipe) -> bool {
        if let Some(bound) = self.cooking_time {
            if recipe.cooking_time > bound {
                return false;
            }
        }
        if let Some(diet) = &self.diet {
            if !recipe.diet.iter().any(|tag| tag == diet) {
                return false;
            }
        }
        if let Some(cuisine) = &self.cuisine {
            if !recipe.cuisine.eq_ignore_ascii_case(cuisine) {
                return false;
            }
        }
        true
    }
}

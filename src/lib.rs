//! Recipe suggestions from an ingredient list.
//!
//! The crate has two paths to a `Vec<Recipe>`:
//!
//! - a local, deterministic engine that customizes five built-in recipe
//!   templates around the caller's ingredients and filters ([`suggest`]),
//! - an optional remote chat-completion provider ([`providers::Suggester`])
//!   that asks a model for suggestions and falls back to the local engine
//!   whenever the remote call fails or no credential is configured.
//!
//! Both paths produce the same [`Recipe`] shape, so a caller rendering the
//! result cannot tell which one answered.
//!
//! ```
//! use recipe_suggest::{suggest, Filters};
//!
//! let ingredients = vec!["chicken".to_string(), "broccoli".to_string()];
//! let recipes = suggest(&ingredients, &Filters::any()).unwrap();
//! assert!(!recipes.is_empty());
//! assert!(recipes[0].title.starts_with("Chicken with Broccoli"));
//! ```

pub mod classifier;
pub mod config;
mod customize;
mod engine;
pub mod error;
pub mod model;
pub mod providers;
mod templates;

pub use classifier::{classify, Classified};
pub use config::AiConfig;
pub use engine::suggest;
pub use error::SuggestError;
pub use model::{FilterSet, Filters, Recipe};
pub use providers::{OpenAiProvider, Suggester, SuggestionProvider};
pub use templates::{RecipeTemplate, TEMPLATES};

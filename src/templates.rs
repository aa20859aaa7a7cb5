//! Built-in recipe templates. Process-wide constant data; every suggestion
//! pass works on a fresh [`Recipe`] instantiated from one of these.

use crate::model::Recipe;

/// A recipe skeleton used as a customization starting point.
///
/// Same shape as [`Recipe`] minus the identifier. Read-only at runtime.
#[derive(Debug)]
pub struct RecipeTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub ingredients: &'static [&'static str],
    pub instructions: &'static [&'static str],
    pub cooking_time: u32,
    pub diet: &'static [&'static str],
    pub cuisine: &'static str,
    pub image_url: &'static str,
}

impl RecipeTemplate {
    /// Build a fresh draft recipe carrying the given identifier.
    pub fn instantiate(&self, id: impl Into<String>) -> Recipe {
        Recipe {
            id: id.into(),
            title: self.title.to_string(),
            description: self.description.to_string(),
            ingredients: self.ingredients.iter().map(|s| s.to_string()).collect(),
            instructions: self.instructions.iter().map(|s| s.to_string()).collect(),
            cooking_time: self.cooking_time,
            diet: self.diet.iter().map(|s| s.to_string()).collect(),
            cuisine: self.cuisine.to_string(),
            image_url: self.image_url.to_string(),
        }
    }
}

/// The five built-in templates, in stable suggestion order.
pub const TEMPLATES: &[RecipeTemplate] = &[
    RecipeTemplate {
        title: "Pasta Dish",
        description: "A comforting pasta dinner ready in under half an hour.",
        ingredients: &["pasta", "olive oil", "garlic", "parmesan cheese"],
        instructions: &[
            "Boil the pasta in salted water until al dente.",
            "Saute the garlic in olive oil over medium heat.",
            "Toss the pasta with the garlic oil and top with parmesan.",
        ],
        cooking_time: 25,
        diet: &["vegetarian"],
        cuisine: "Italian",
        image_url: "https://images.unsplash.com/photo-1551183053-bf91a1d81141",
    },
    RecipeTemplate {
        title: "Stir Fry",
        description: "A quick stir fry with a savory garlic-ginger sauce.",
        ingredients: &["rice", "soy sauce", "ginger", "sesame oil"],
        instructions: &[
            "Cook the rice according to package directions.",
            "Heat the sesame oil in a wok over high heat.",
            "Stir fry everything with the soy sauce and ginger, then serve over rice.",
        ],
        cooking_time: 20,
        diet: &["vegetarian"],
        cuisine: "Asian",
        image_url: "https://images.unsplash.com/photo-1512058564366-18510be2db19",
    },
    RecipeTemplate {
        title: "Fresh Salad",
        description: "A crisp salad with a bright lemon vinaigrette.",
        ingredients: &["lettuce", "cucumber", "olive oil", "lemon juice"],
        instructions: &[
            "Wash and chop the lettuce and cucumber.",
            "Whisk the olive oil and lemon juice into a dressing.",
            "Toss the salad with the dressing just before serving.",
        ],
        cooking_time: 10,
        diet: &["vegetarian", "vegan", "gluten-free"],
        cuisine: "Mediterranean",
        image_url: "https://images.unsplash.com/photo-1512621776951-a57141f2eefd",
    },
    RecipeTemplate {
        title: "Hearty Soup",
        description: "A slow-simmered soup for cold evenings.",
        ingredients: &["vegetable broth", "carrots", "celery", "potatoes"],
        instructions: &[
            "Chop the carrots, celery, and potatoes.",
            "Bring the broth to a boil and add the vegetables.",
            "Simmer until the potatoes are tender, then season to taste.",
        ],
        cooking_time: 40,
        diet: &["vegetarian", "gluten-free"],
        cuisine: "American",
        image_url: "https://images.unsplash.com/photo-1547592166-23ac45744acd",
    },
    RecipeTemplate {
        title: "Quick Breakfast",
        description: "A simple breakfast plate to start the day.",
        ingredients: &["eggs", "bread", "butter"],
        instructions: &[
            "Toast the bread and butter it.",
            "Fry the eggs to your liking.",
            "Plate the eggs over the toast and season with salt and pepper.",
        ],
        cooking_time: 15,
        diet: &["vegetarian"],
        cuisine: "American",
        image_url: "https://images.unsplash.com/photo-1525351484163-7529414344d8",
    },
];

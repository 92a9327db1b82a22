//! Startup fixture recipes.

use crate::recipe::{Recipe, RecipeKind};

enum SeedKind {
    MainCourse(&'static str),
    Dessert(&'static str),
}

struct SeedRecipe {
    name: &'static str,
    ingredients: &'static [&'static str],
    steps: &'static [&'static str],
    cooking_time: u32,
    kind: SeedKind,
}

const SAMPLE_RECIPES: &[SeedRecipe] = &[
    SeedRecipe {
        name: "Spaghetti Carbonara",
        ingredients: &[
            "Spaghetti",
            "Guanciale",
            "Pecorino Cheese",
            "Eggs",
            "Black Pepper",
        ],
        steps: &[
            "Boil spaghetti",
            "Cook guanciale",
            "Mix with eggs and cheese",
            "Add black pepper",
        ],
        cooking_time: 25,
        kind: SeedKind::MainCourse("Italian"),
    },
    SeedRecipe {
        name: "Chicken Alfredo",
        ingredients: &[
            "Fettuccine",
            "Chicken Breast",
            "Heavy Cream",
            "Parmesan Cheese",
            "Garlic",
        ],
        steps: &[
            "Cook fettuccine",
            "Sauté chicken",
            "Mix with cream and cheese",
            "Add garlic",
        ],
        cooking_time: 30,
        kind: SeedKind::MainCourse("Italian"),
    },
    SeedRecipe {
        name: "Classic Chocolate Cake",
        ingredients: &[
            "Flour",
            "Sugar",
            "Cocoa Powder",
            "Baking Powder",
            "Butter",
            "Eggs",
            "Milk",
            "Vanilla Extract",
        ],
        steps: &[
            "Mix dry ingredients",
            "Cream butter and sugar",
            "Add eggs and vanilla",
            "Alternate adding dry ingredients and milk",
            "Bake in the oven",
        ],
        cooking_time: 40,
        kind: SeedKind::Dessert("Cake"),
    },
    SeedRecipe {
        name: "Strawberry Cheesecake",
        ingredients: &[
            "Graham Cracker Crust",
            "Cream Cheese",
            "Sugar",
            "Eggs",
            "Vanilla Extract",
            "Strawberries",
        ],
        steps: &[
            "Prepare crust",
            "Mix cream cheese, sugar, eggs, and vanilla",
            "Pour over crust",
            "Top with strawberries",
            "Chill in the fridge",
        ],
        cooking_time: 45,
        kind: SeedKind::Dessert("Cheesecake"),
    },
];

impl SeedRecipe {
    fn to_recipe(&self) -> Recipe {
        let kind = match self.kind {
            SeedKind::MainCourse(cuisine) => RecipeKind::MainCourse {
                cuisine: cuisine.to_string(),
            },
            SeedKind::Dessert(dessert_type) => RecipeKind::Dessert {
                dessert_type: dessert_type.to_string(),
            },
        };

        Recipe::with_kind(
            self.name,
            self.ingredients.iter().map(|s| s.to_string()).collect(),
            self.steps.iter().map(|s| s.to_string()).collect(),
            self.cooking_time,
            kind,
        )
    }
}

/// The four recipes every catalog starts with: two Italian main courses,
/// a cake and a cheesecake, in that order.
pub fn seed_recipes() -> Vec<Recipe> {
    SAMPLE_RECIPES.iter().map(SeedRecipe::to_recipe).collect()
}

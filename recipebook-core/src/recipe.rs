//! Recipe entity model.
//!
//! Every recipe shares the same base record; the [`RecipeKind`] tag decides
//! which extra attribute (if any) feeds the category index and which extra
//! line is appended when the recipe is rendered.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Recipe variant, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecipeKind {
    Generic,
    MainCourse {
        cuisine: String,
    },
    Dessert {
        #[serde(rename = "type")]
        dessert_type: String,
    },
}

impl RecipeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecipeKind::Generic => "generic",
            RecipeKind::MainCourse { .. } => "main_course",
            RecipeKind::Dessert { .. } => "dessert",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recipe {
    name: String,
    ingredients: Vec<String>,
    /// Execution order matters here, unlike `ingredients`.
    steps: Vec<String>,
    /// Minutes.
    cooking_time: u32,
    #[serde(flatten)]
    kind: RecipeKind,
}

impl Recipe {
    /// Create a generic recipe, which is only ever filed under "All".
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<String>,
        steps: Vec<String>,
        cooking_time: u32,
    ) -> Self {
        Self::with_kind(name, ingredients, steps, cooking_time, RecipeKind::Generic)
    }

    pub fn main_course(
        name: impl Into<String>,
        ingredients: Vec<String>,
        steps: Vec<String>,
        cooking_time: u32,
        cuisine: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            name,
            ingredients,
            steps,
            cooking_time,
            RecipeKind::MainCourse {
                cuisine: cuisine.into(),
            },
        )
    }

    pub fn dessert(
        name: impl Into<String>,
        ingredients: Vec<String>,
        steps: Vec<String>,
        cooking_time: u32,
        dessert_type: impl Into<String>,
    ) -> Self {
        Self::with_kind(
            name,
            ingredients,
            steps,
            cooking_time,
            RecipeKind::Dessert {
                dessert_type: dessert_type.into(),
            },
        )
    }

    pub fn with_kind(
        name: impl Into<String>,
        ingredients: Vec<String>,
        steps: Vec<String>,
        cooking_time: u32,
        kind: RecipeKind,
    ) -> Self {
        Self {
            name: name.into(),
            ingredients,
            steps,
            cooking_time,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn ingredients(&self) -> &[String] {
        &self.ingredients
    }

    pub fn set_ingredients(&mut self, ingredients: Vec<String>) {
        self.ingredients = ingredients;
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn set_steps(&mut self, steps: Vec<String>) {
        self.steps = steps;
    }

    pub fn cooking_time(&self) -> u32 {
        self.cooking_time
    }

    pub fn set_cooking_time(&mut self, minutes: u32) {
        self.cooking_time = minutes;
    }

    pub fn kind(&self) -> &RecipeKind {
        &self.kind
    }

    /// Cuisine of a main course; empty for every other kind.
    pub fn cuisine(&self) -> &str {
        match &self.kind {
            RecipeKind::MainCourse { cuisine } => cuisine,
            _ => "",
        }
    }

    /// Accepted on every recipe, but only a main course stores it.
    ///
    /// Does not move the recipe between category buckets once it has been
    /// added to a catalog.
    pub fn set_cuisine(&mut self, value: impl Into<String>) {
        if let RecipeKind::MainCourse { cuisine } = &mut self.kind {
            *cuisine = value.into();
        }
    }

    /// Dessert type (e.g. "Cake"); `None` for every other kind.
    pub fn dessert_type(&self) -> Option<&str> {
        match &self.kind {
            RecipeKind::Dessert { dessert_type } => Some(dessert_type.as_str()),
            _ => None,
        }
    }

    /// Returns false, leaving the recipe untouched, when it is not a dessert.
    pub fn set_dessert_type(&mut self, value: impl Into<String>) -> bool {
        match &mut self.kind {
            RecipeKind::Dessert { dessert_type } => {
                *dessert_type = value.into();
                true
            }
            _ => false,
        }
    }

    /// The label this recipe is filed under besides "All".
    pub fn category_key(&self) -> Option<&str> {
        match &self.kind {
            RecipeKind::Generic => None,
            RecipeKind::MainCourse { cuisine } => Some(cuisine.as_str()),
            RecipeKind::Dessert { dessert_type } => Some(dessert_type.as_str()),
        }
    }

    pub fn category_key_or_empty(&self) -> &str {
        self.category_key().unwrap_or("")
    }

    pub fn has_ingredient(&self, ingredient: &str) -> bool {
        self.ingredients.iter().any(|i| i == ingredient)
    }

    /// Multi-line text rendering used by the display layer.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Recipe: {}", self.name)?;
        writeln!(f, "Ingredients:")?;
        for ingredient in &self.ingredients {
            writeln!(f, "- {}", ingredient)?;
        }
        writeln!(f, "Steps:")?;
        for step in &self.steps {
            writeln!(f, "{}", step)?;
        }
        writeln!(f, "Cooking Time: {} minutes", self.cooking_time)?;

        match &self.kind {
            RecipeKind::Generic => Ok(()),
            RecipeKind::MainCourse { cuisine } => writeln!(f, "Cuisine: {}", cuisine),
            RecipeKind::Dessert { dessert_type } => writeln!(f, "Type: {}", dessert_type),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_render_generic() {
        let recipe = Recipe::new(
            "Toast",
            strings(&["Bread", "Butter"]),
            strings(&["Toast bread", "Spread butter"]),
            5,
        );

        assert_eq!(
            recipe.render(),
            "Recipe: Toast\n\
             Ingredients:\n\
             - Bread\n\
             - Butter\n\
             Steps:\n\
             Toast bread\n\
             Spread butter\n\
             Cooking Time: 5 minutes\n"
        );
    }

    #[test]
    fn test_render_appends_variant_line() {
        let main = Recipe::main_course("Carbonara", vec![], vec![], 25, "Italian");
        assert!(main.render().ends_with("Cooking Time: 25 minutes\nCuisine: Italian\n"));

        let dessert = Recipe::dessert("Brownies", vec![], vec![], 30, "Bar");
        assert!(dessert.render().ends_with("Cooking Time: 30 minutes\nType: Bar\n"));
    }

    #[test]
    fn test_category_key() {
        assert_eq!(Recipe::new("Toast", vec![], vec![], 5).category_key(), None);
        assert_eq!(
            Recipe::new("Toast", vec![], vec![], 5).category_key_or_empty(),
            ""
        );
        assert_eq!(
            Recipe::main_course("Pho", vec![], vec![], 90, "Vietnamese").category_key(),
            Some("Vietnamese")
        );
        assert_eq!(
            Recipe::dessert("Flan", vec![], vec![], 60, "Custard").category_key(),
            Some("Custard")
        );
    }

    #[test]
    fn test_set_cuisine_only_sticks_on_main_course() {
        let mut generic = Recipe::new("Toast", vec![], vec![], 5);
        generic.set_cuisine("French");
        assert_eq!(generic.cuisine(), "");
        assert_eq!(generic.kind(), &RecipeKind::Generic);

        let mut dessert = Recipe::dessert("Flan", vec![], vec![], 60, "Custard");
        dessert.set_cuisine("Spanish");
        assert_eq!(dessert.cuisine(), "");

        let mut main = Recipe::main_course("Pho", vec![], vec![], 90, "Vietnamese");
        main.set_cuisine("Thai");
        assert_eq!(main.cuisine(), "Thai");
        assert_eq!(main.category_key(), Some("Thai"));
    }

    #[test]
    fn test_set_dessert_type() {
        let mut dessert = Recipe::dessert("Flan", vec![], vec![], 60, "Custard");
        assert!(dessert.set_dessert_type("Pudding"));
        assert_eq!(dessert.dessert_type(), Some("Pudding"));

        let mut main = Recipe::main_course("Pho", vec![], vec![], 90, "Vietnamese");
        assert!(!main.set_dessert_type("Cake"));
        assert_eq!(main.dessert_type(), None);
    }

    #[test]
    fn test_has_ingredient_is_exact() {
        let recipe = Recipe::new("Aioli", strings(&["Garlic", "Olive Oil"]), vec![], 10);
        assert!(recipe.has_ingredient("Garlic"));
        assert!(!recipe.has_ingredient("garlic"));
        assert!(!recipe.has_ingredient("Garlic "));
        assert!(!recipe.has_ingredient("Olive"));
    }
}

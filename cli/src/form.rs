//! Turns free-text recipe fields into a [`Recipe`].
//!
//! The catalog trusts its input, so this is where malformed values (such as a
//! non-numeric cooking time) are rejected.

use recipebook_core::{Recipe, RecipeKind};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("Invalid cooking time {0:?}: expected a whole number of minutes")]
    InvalidCookingTime(String),
}

/// Raw field values as typed by the user.
#[derive(Debug, Clone, Default)]
pub struct RecipeForm {
    pub name: String,
    /// Comma-separated
    pub ingredients: String,
    /// One step per line
    pub steps: String,
    pub cooking_time: String,
    pub cuisine: Option<String>,
    pub dessert_type: Option<String>,
}

impl RecipeForm {
    pub fn into_recipe(self) -> Result<Recipe, FormError> {
        let cooking_time = parse_cooking_time(&self.cooking_time)?;

        let kind = match (self.cuisine, self.dessert_type) {
            (_, Some(dessert_type)) => RecipeKind::Dessert { dessert_type },
            (Some(cuisine), None) => RecipeKind::MainCourse { cuisine },
            (None, None) => RecipeKind::Generic,
        };

        Ok(Recipe::with_kind(
            self.name,
            split_ingredients(&self.ingredients),
            split_steps(&self.steps),
            cooking_time,
            kind,
        ))
    }
}

/// Split on commas. Tokens are kept verbatim, so `"a, b"` yields `" b"`.
pub fn split_ingredients(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}

/// Split on newlines, one step per line.
pub fn split_steps(raw: &str) -> Vec<String> {
    raw.split('\n').map(str::to_string).collect()
}

pub fn parse_cooking_time(raw: &str) -> Result<u32, FormError> {
    raw.trim()
        .parse()
        .map_err(|_| FormError::InvalidCookingTime(raw.to_string()))
}

//! In-memory recipe catalog.
//!
//! The catalog owns every recipe in an insertion-ordered arena and keeps a
//! derived index from category label to recipe handles. Buckets never own
//! recipes; they hold [`RecipeId`]s that are resolved through the arena, so a
//! handle left behind by [`Catalog::remove_at`] can never reach freed data.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use uuid::Uuid;

use crate::error::CatalogError;
use crate::recipe::Recipe;

/// Synthetic category every recipe is filed under.
pub const ALL_CATEGORY: &str = "All";

/// Identity of a recipe inside a catalog. Two recipes with identical fields
/// still get distinct ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecipeId(Uuid);

impl RecipeId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone)]
struct Entry {
    id: RecipeId,
    recipe: Recipe,
}

/// Owning recipe list plus the category index derived from it.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Entry>,
    categories: BTreeMap<String, Vec<RecipeId>>,
}

impl Catalog {
    /// An empty catalog with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// A catalog holding the startup fixture recipes.
    pub fn seeded() -> Self {
        let mut catalog = Self::new();
        for recipe in crate::seed::seed_recipes() {
            catalog.add(recipe);
        }
        catalog
    }

    /// Number of live recipes; stale bucket handles are not counted.
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }

    /// Take ownership of `recipe` and file it under its category key (if any)
    /// and under "All".
    pub fn add(&mut self, recipe: Recipe) -> RecipeId {
        let id = RecipeId::new();

        let key = recipe.category_key().map(str::to_owned);

        tracing::debug!(
            recipe_id = %id,
            name = recipe.name(),
            kind = recipe.kind().as_str(),
            category = key.as_deref().unwrap_or(""),
            "Adding recipe"
        );

        self.recipes.push(Entry { id, recipe });

        if let Some(key) = key {
            self.categories.entry(key).or_default().push(id);
        }
        self.categories
            .entry(ALL_CATEGORY.to_string())
            .or_default()
            .push(id);

        id
    }

    /// Delete a recipe by identity, removing it from every bucket.
    pub fn remove(&mut self, id: RecipeId) -> Result<Recipe, CatalogError> {
        let Some(position) = self.position(id) else {
            tracing::warn!(recipe_id = %id, "Recipe not found");
            return Err(CatalogError::RecipeNotFound(id));
        };

        // A key of "All" files the recipe twice in the same bucket.
        for bucket in self.categories.values_mut() {
            bucket.retain(|&member| member != id);
        }

        let entry = self.recipes.remove(position);
        tracing::info!(recipe_id = %id, name = entry.recipe.name(), "Recipe deleted");
        Ok(entry.recipe)
    }

    /// Delete the recipe at `index` from the recipe list only.
    ///
    /// Category buckets keep the removed recipe's handle; listings skip it
    /// because it no longer resolves. Use [`Catalog::resolve_index`] and
    /// [`Catalog::remove`] when the index must be cleaned up too.
    pub fn remove_at(&mut self, index: usize) -> Result<Recipe, CatalogError> {
        let len = self.recipes.len();
        if index >= len {
            tracing::warn!(index, len, "Recipe index out of range");
            return Err(CatalogError::IndexOutOfRange { index, len });
        }

        let entry = self.recipes.remove(index);
        tracing::info!(
            recipe_id = %entry.id,
            index,
            name = entry.recipe.name(),
            "Recipe deleted by position"
        );
        Ok(entry.recipe)
    }

    pub fn resolve_index(&self, index: usize) -> Option<RecipeId> {
        self.recipes.get(index).map(|entry| entry.id)
    }

    pub fn position(&self, id: RecipeId) -> Option<usize> {
        self.recipes.iter().position(|entry| entry.id == id)
    }

    pub fn get(&self, id: RecipeId) -> Option<&Recipe> {
        self.recipes
            .iter()
            .find(|entry| entry.id == id)
            .map(|entry| &entry.recipe)
    }

    /// Mutable access for editing. Changing a recipe's cuisine or dessert type
    /// here does not move it to a different bucket.
    pub fn get_mut(&mut self, id: RecipeId) -> Option<&mut Recipe> {
        self.recipes
            .iter_mut()
            .find(|entry| entry.id == id)
            .map(|entry| &mut entry.recipe)
    }

    /// All recipes with their ids, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RecipeId, &Recipe)> + '_ {
        self.recipes.iter().map(|entry| (entry.id, &entry.recipe))
    }

    /// All recipes in insertion order.
    pub fn recipes(&self) -> impl Iterator<Item = &Recipe> + '_ {
        self.recipes.iter().map(|entry| &entry.recipe)
    }

    /// Recipes filed under `label`, in the order they joined that bucket.
    pub fn list_by_category(&self, label: &str) -> Result<Vec<&Recipe>, CatalogError> {
        let bucket = self
            .categories
            .get(label)
            .ok_or_else(|| CatalogError::CategoryNotFound(label.to_string()))?;

        Ok(bucket.iter().filter_map(|&id| self.get(id)).collect())
    }

    /// Raw bucket contents, including handles left behind by
    /// [`Catalog::remove_at`].
    pub fn category_ids(&self, label: &str) -> Option<&[RecipeId]> {
        self.categories.get(label).map(Vec::as_slice)
    }

    pub fn categories(&self) -> &BTreeMap<String, Vec<RecipeId>> {
        &self.categories
    }

    /// Category labels in lexicographic order. Labels stay listed after
    /// their last recipe is deleted.
    pub fn category_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.categories.keys().map(String::as_str)
    }

    /// Label at 1-based `number` in [`Catalog::category_names`] order.
    pub fn category_at(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|i| self.category_names().nth(i))
    }

    /// Recipes whose ingredient list contains `ingredient` exactly
    /// (case-sensitive), in insertion order.
    pub fn search_by_ingredient(&self, ingredient: &str) -> Vec<&Recipe> {
        self.recipes()
            .filter(|recipe| recipe.has_ingredient(ingredient))
            .collect()
    }
}

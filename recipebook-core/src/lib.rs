pub mod catalog;
pub mod error;
pub mod recipe;
pub mod seed;

pub use catalog::{Catalog, RecipeId, ALL_CATEGORY};
pub use error::CatalogError;
pub use recipe::{Recipe, RecipeKind};
pub use seed::seed_recipes;

use thiserror::Error;

use crate::catalog::RecipeId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(RecipeId),

    #[error("Category not found: {0}")]
    CategoryNotFound(String),

    #[error("Index {index} out of range for catalog of {len} recipes")]
    IndexOutOfRange { index: usize, len: usize },
}

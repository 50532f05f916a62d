//! Storage module
//!
//! Repository traits for recipes and widgets, with in-memory implementations.
//! Services receive a repository instead of reaching for a global map.

pub mod recipes;
pub mod widgets;

use thiserror::Error;

pub use recipes::{InMemoryRecipeRepository, RecipeRepository};
pub use widgets::{InMemoryWidgetRepository, WidgetRepository};

/// Storage error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store lock poisoned: {0}")]
    Poisoned(String),

    #[error("Duplicate widget key: {0}")]
    DuplicateKey(String),
}

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        StoreError::Poisoned(e.to_string())
    }
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

//! Recipe repository

use std::collections::HashMap;
use std::sync::RwLock;

use super::StoreResult;
use crate::models::Recipe;

/// Storage for recipes keyed by their generated id
pub trait RecipeRepository: Send + Sync {
    fn get(&self, id: &str) -> StoreResult<Option<Recipe>>;

    /// Insert or replace by id
    fn save(&self, recipe: Recipe) -> StoreResult<Recipe>;

    /// Returns the removed recipe, if it existed
    fn delete(&self, id: &str) -> StoreResult<Option<Recipe>>;

    /// All recipes ordered by name
    fn list(&self) -> StoreResult<Vec<Recipe>>;

    fn count(&self) -> StoreResult<usize>;
}

/// Process-local recipe store
#[derive(Debug, Default)]
pub struct InMemoryRecipeRepository {
    recipes: RwLock<HashMap<String, Recipe>>,
}

impl InMemoryRecipeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecipeRepository for InMemoryRecipeRepository {
    fn get(&self, id: &str) -> StoreResult<Option<Recipe>> {
        Ok(self.recipes.read()?.get(id).cloned())
    }

    fn save(&self, recipe: Recipe) -> StoreResult<Recipe> {
        self.recipes.write()?.insert(recipe.id.clone(), recipe.clone());
        Ok(recipe)
    }

    fn delete(&self, id: &str) -> StoreResult<Option<Recipe>> {
        Ok(self.recipes.write()?.remove(id))
    }

    fn list(&self) -> StoreResult<Vec<Recipe>> {
        let mut recipes: Vec<Recipe> = self.recipes.read()?.values().cloned().collect();
        recipes.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        Ok(recipes)
    }

    fn count(&self) -> StoreResult<usize> {
        Ok(self.recipes.read()?.len())
    }
}

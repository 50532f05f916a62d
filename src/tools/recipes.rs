//! Recipe Tools
//!
//! Tools for storing, listing and deleting recipes.

use serde::Serialize;

use crate::models::{Recipe, RecipeCreate};
use crate::store::RecipeRepository;

/// Response for create_recipe
#[derive(Debug, Serialize)]
pub struct CreateRecipeResponse {
    pub id: String,
    pub name: String,
    pub created_at: String,
}

/// Recipe summary for listing
#[derive(Debug, Serialize)]
pub struct RecipeSummary {
    pub id: String,
    pub name: String,
    pub ingredient_count: usize,
    pub total_time: u64,
}

/// Response for list_recipes
#[derive(Debug, Serialize)]
pub struct ListRecipesResponse {
    pub recipes: Vec<RecipeSummary>,
    pub count: usize,
}

/// Response for successful delete
#[derive(Debug, Serialize)]
pub struct RecipeDeleteResponse {
    pub message: String,
    pub deleted_recipe_id: String,
}

/// Create a new recipe
pub fn create_recipe(
    repo: &dyn RecipeRepository,
    mut data: RecipeCreate,
) -> Result<CreateRecipeResponse, String> {
    data.name = data.name.trim().to_string();
    if data.name.is_empty() {
        return Err("Recipe name cannot be empty".to_string());
    }

    let recipe = repo
        .save(Recipe::new(data))
        .map_err(|e| format!("Failed to create recipe: {}", e))?;

    tracing::info!(id = %recipe.id, name = %recipe.name, "created recipe");

    Ok(CreateRecipeResponse {
        id: recipe.id,
        name: recipe.name,
        created_at: recipe.created_at,
    })
}

/// Get a recipe by id
pub fn get_recipe(repo: &dyn RecipeRepository, id: &str) -> Result<Option<Recipe>, String> {
    let id = validate_id(id)?;
    repo.get(id).map_err(|e| format!("Failed to get recipe: {}", e))
}

/// List all recipes
pub fn list_recipes(repo: &dyn RecipeRepository) -> Result<ListRecipesResponse, String> {
    let recipes = repo
        .list()
        .map_err(|e| format!("Failed to list recipes: {}", e))?;

    let summaries: Vec<RecipeSummary> = recipes
        .into_iter()
        .map(|r| RecipeSummary {
            ingredient_count: r.ingredients.len(),
            total_time: r.total_time(),
            id: r.id,
            name: r.name,
        })
        .collect();

    Ok(ListRecipesResponse {
        count: summaries.len(),
        recipes: summaries,
    })
}

/// Delete a recipe by id. Returns Ok(None) if it does not exist.
pub fn delete_recipe(
    repo: &dyn RecipeRepository,
    id: &str,
) -> Result<Option<RecipeDeleteResponse>, String> {
    let id = validate_id(id)?;

    let deleted = repo
        .delete(id)
        .map_err(|e| format!("Failed to delete recipe: {}", e))?;

    Ok(deleted.map(|recipe| {
        tracing::info!(id = %recipe.id, "deleted recipe");
        RecipeDeleteResponse {
            message: "Recipe deleted successfully".to_string(),
            deleted_recipe_id: recipe.id,
        }
    }))
}

fn validate_id(id: &str) -> Result<&str, String> {
    let id = id.trim();
    if id.is_empty() {
        return Err("Recipe ID cannot be empty".to_string());
    }
    Ok(id)
}

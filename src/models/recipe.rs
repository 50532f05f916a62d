//! Recipe model
//!
//! A stored recipe. Ingredients are free-text lines; quantities for scaling
//! are passed separately to the scaler.

use serde::{Deserialize, Serialize};

/// A stored recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    /// Minutes
    pub prep_time: u32,
    /// Minutes
    pub cook_time: u32,
    pub created_at: String,
}

/// Data for creating a new recipe
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeCreate {
    pub name: String,
    #[serde(default)]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub prep_time: u32,
    #[serde(default)]
    pub cook_time: u32,
}

impl Recipe {
    /// Build a recipe with a fresh v4 id
    pub fn new(data: RecipeCreate) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: data.name,
            ingredients: data.ingredients,
            instructions: data.instructions,
            prep_time: data.prep_time,
            cook_time: data.cook_time,
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Prep plus cook time
    pub fn total_time(&self) -> u64 {
        u64::from(self.prep_time) + u64::from(self.cook_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn margherita() -> RecipeCreate {
        RecipeCreate {
            name: "Margherita".to_string(),
            ingredients: vec!["pizza dough".to_string(), "tomato".to_string()],
            instructions: "Top and bake".to_string(),
            prep_time: 15,
            cook_time: 2,
        }
    }

    #[test]
    fn test_new_assigns_unique_ids() {
        let a = Recipe::new(margherita());
        let b = Recipe::new(margherita());
        assert_ne!(a.id, b.id);
        assert!(uuid::Uuid::parse_str(&a.id).is_ok());
        assert_eq!(a.total_time(), 17);
    }

    #[test]
    fn test_total_time_does_not_wrap() {
        let mut data = margherita();
        data.prep_time = u32::MAX;
        data.cook_time = 1;
        let recipe = Recipe::new(data);
        assert_eq!(recipe.total_time(), u64::from(u32::MAX) + 1);
    }

    #[test]
    fn test_create_defaults() {
        let data: RecipeCreate = serde_json::from_str(r#"{"name": "Focaccia"}"#).unwrap();
        assert!(data.ingredients.is_empty());
        assert_eq!(data.prep_time, 0);
    }
}

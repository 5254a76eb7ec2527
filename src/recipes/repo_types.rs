use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::ingredients::repo_types::Ingredient;

/// Recipe record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub url: String, // stored as imageurl
    pub category_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeWithIngredients {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
}

/// Fields accepted when creating a recipe.
#[derive(Debug, Clone)]
pub struct NewRecipe {
    pub name: String,
    pub description: String,
    pub long_description: String,
    pub url: String,
    pub category_id: i32,
    pub ingredient_ids: Vec<i32>,
}

/// The columns that may change after creation.
#[derive(Debug, Clone)]
pub struct RecipeChanges {
    pub name: String,
    pub description: String,
    pub url: String,
}

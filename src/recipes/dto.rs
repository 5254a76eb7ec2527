use serde::Deserialize;
use serde_json::Value;

use super::repo_types::{NewRecipe, RecipeChanges};

/// Request body for POST /recipe.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecipeRequest {
    pub name: String,
    #[serde(default)]
    pub url: String,
    pub category_id: i32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub long_description: String,
    #[serde(default)]
    pub ingredient_ids: Vec<i32>,
}

impl From<CreateRecipeRequest> for NewRecipe {
    fn from(r: CreateRecipeRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            long_description: r.long_description,
            url: r.url,
            category_id: r.category_id,
            ingredient_ids: r.ingredient_ids,
        }
    }
}

/// Request body for PUT /recipe/:recipeId. All three columns are overwritten,
/// so all three must be sent.
#[derive(Debug, Deserialize)]
pub struct UpdateRecipeRequest {
    pub name: String,
    pub description: String,
    pub url: String,
}

impl From<UpdateRecipeRequest> for RecipeChanges {
    fn from(r: UpdateRecipeRequest) -> Self {
        Self {
            name: r.name,
            description: r.description,
            url: r.url,
        }
    }
}

/// Request body for POST /recipe/:recipeId/ingredients.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkIngredientsRequest {
    pub ingredient_ids: Vec<i32>,
}

/// Reads the optional category filter of GET /recipes.
///
/// An empty body means no filter. Otherwise the body must be a JSON object; a
/// missing or non-string `category` also means no filter.
pub fn category_filter(body: &[u8]) -> Result<String, String> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(String::new());
    }

    let value: Value = serde_json::from_slice(body).map_err(|e| e.to_string())?;
    let Value::Object(fields) = value else {
        return Err("request body must be a JSON object".into());
    };

    Ok(fields
        .get("category")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string())
}

use serde::Deserialize;

/// Request body for POST /ingredient.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIngredientRequest {
    pub name: String,
    pub amount: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub is_available: bool,
}

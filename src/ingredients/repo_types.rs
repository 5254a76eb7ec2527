use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Ingredient record in the database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    pub id: i32,
    pub name: String,
    pub amount: String, // free-form, e.g. "1 tsp"
    pub url: String,    // stored as imageurl
    pub is_available: bool,
}

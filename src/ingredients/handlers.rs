use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{dto::CreateIngredientRequest, repo_types::Ingredient};
use crate::{error::ApiError, extract::JsonBody, state::AppState};

pub fn ingredient_routes() -> Router<AppState> {
    Router::new()
        .route("/ingredient", post(create_ingredient))
        .route("/ingredients", get(list_ingredients))
}

#[instrument(skip(state, payload))]
pub async fn create_ingredient(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateIngredientRequest>,
) -> Result<(StatusCode, String), ApiError> {
    let id = state
        .store
        .insert_ingredient(
            &payload.name,
            &payload.amount,
            &payload.url,
            payload.is_available,
        )
        .await?;
    info!(ingredient_id = id, name = %payload.name, "ingredient created");
    Ok((StatusCode::CREATED, format!("Ingredient id: {id}")))
}

#[instrument(skip(state))]
pub async fn list_ingredients(
    State(state): State<AppState>,
) -> Result<Json<Vec<Ingredient>>, ApiError> {
    Ok(Json(state.store.get_ingredients().await?))
}

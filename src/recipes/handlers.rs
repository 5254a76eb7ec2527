use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{
    dto::{category_filter, CreateRecipeRequest, LinkIngredientsRequest, UpdateRecipeRequest},
    repo_types::{Recipe, RecipeWithIngredients},
};
use crate::{
    error::ApiError,
    extract::{parse_id, JsonBody},
    state::AppState,
};

pub fn recipe_routes() -> Router<AppState> {
    Router::new()
        .route("/recipes", get(list_recipes))
        .route("/recipe", post(create_recipe))
        .route("/recipe/:recipeId", get(get_recipe).put(update_recipe))
        .route("/recipe/:recipeId/ingredients", post(link_ingredients))
}

/// GET /recipes, with an optional `{"category": "..."}` body.
#[instrument(skip(state, body))]
pub async fn list_recipes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<Vec<Recipe>>, ApiError> {
    let category = category_filter(&body).map_err(|e| {
        warn!(error = %e, "invalid recipes filter");
        ApiError::BadRequest(e)
    })?;

    let recipes = state.store.get_recipes(&category).await?;
    Ok(Json(recipes))
}

#[instrument(skip(state))]
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
) -> Result<Json<RecipeWithIngredients>, ApiError> {
    let recipe_id = parse_id(&recipe_id)?;
    let recipe = state.store.get_recipe_with_ingredients(recipe_id).await?;
    Ok(Json(recipe))
}

#[instrument(skip(state, payload))]
pub async fn create_recipe(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateRecipeRequest>,
) -> Result<(StatusCode, String), ApiError> {
    let id = state.store.insert_recipe(payload.into()).await?;
    info!(recipe_id = id, "recipe created");
    Ok((StatusCode::CREATED, format!("Recipe id: {id}")))
}

#[instrument(skip(state, payload))]
pub async fn update_recipe(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    JsonBody(payload): JsonBody<UpdateRecipeRequest>,
) -> Result<StatusCode, ApiError> {
    let recipe_id = parse_id(&recipe_id)?;
    state.store.update_recipe(recipe_id, payload.into()).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(state, payload))]
pub async fn link_ingredients(
    State(state): State<AppState>,
    Path(recipe_id): Path<String>,
    JsonBody(payload): JsonBody<LinkIngredientsRequest>,
) -> Result<StatusCode, ApiError> {
    let recipe_id = parse_id(&recipe_id)?;
    state
        .store
        .insert_recipe_ingredient(recipe_id, payload.ingredient_ids)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

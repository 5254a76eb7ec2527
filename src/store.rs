use std::time::Duration;

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, Connection, PgPool};
use tracing::{debug, info};

use crate::{
    config::DbConfig,
    error::StoreError,
    health::{HealthReport, PoolStats},
    ingredients::{self, repo_types::Ingredient},
    recipes::{
        self,
        repo_types::{NewRecipe, Recipe, RecipeChanges, RecipeWithIngredients},
    },
};

const MAX_CONNECTIONS: u32 = 10;
const PING_TIMEOUT: Duration = Duration::from_secs(1);

/// Domain operations over the recipe store. Handlers only see this trait.
#[async_trait]
pub trait RecipeStore: Send + Sync {
    /// Ping the store and report pool usage. Never fails; problems show up as `down`.
    async fn health(&self) -> HealthReport;
    async fn close(&self);

    async fn insert_recipe(&self, recipe: NewRecipe) -> Result<i32, StoreError>;
    async fn update_recipe(&self, id: i32, changes: RecipeChanges) -> Result<(), StoreError>;
    async fn insert_recipe_ingredient(
        &self,
        recipe_id: i32,
        ingredient_ids: Vec<i32>,
    ) -> Result<(), StoreError>;
    /// An empty `category` returns every recipe.
    async fn get_recipes(&self, category: &str) -> Result<Vec<Recipe>, StoreError>;
    async fn get_recipe_with_ingredients(
        &self,
        recipe_id: i32,
    ) -> Result<RecipeWithIngredients, StoreError>;

    async fn insert_ingredient(
        &self,
        name: &str,
        amount: &str,
        url: &str,
        is_available: bool,
    ) -> Result<i32, StoreError>;
    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, StoreError>;
}

#[derive(Clone)]
pub struct PgStore {
    db: PgPool,
    database: String,
}

impl PgStore {
    pub async fn connect(cfg: &DbConfig) -> Result<Self, StoreError> {
        let db = PgPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(cfg.connect_options())
            .await?;
        info!(host = %cfg.host, database = %cfg.database, "connected to database");
        Ok(Self::from_pool(db, &cfg.database))
    }

    pub fn from_pool(db: PgPool, database: &str) -> Self {
        Self {
            db,
            database: database.to_string(),
        }
    }

    fn pool_stats(&self) -> PoolStats {
        let open = self.db.size();
        let idle = self.db.num_idle() as u32;
        PoolStats {
            open_connections: open,
            in_use: open.saturating_sub(idle),
            idle,
            max_connections: self.db.options().get_max_connections(),
        }
    }
}

#[async_trait]
impl RecipeStore for PgStore {
    async fn health(&self) -> HealthReport {
        let ping = async {
            let mut conn = self.db.acquire().await?;
            conn.ping().await
        };

        match tokio::time::timeout(PING_TIMEOUT, ping).await {
            Ok(Ok(())) => HealthReport::up(self.pool_stats()),
            Ok(Err(e)) => HealthReport::down(e),
            Err(_) => HealthReport::down(format!("ping timed out after {PING_TIMEOUT:?}")),
        }
    }

    async fn close(&self) {
        self.db.close().await;
        info!(database = %self.database, "disconnected from database");
    }

    async fn insert_recipe(&self, recipe: NewRecipe) -> Result<i32, StoreError> {
        info!(name = %recipe.name, ingredients = recipe.ingredient_ids.len(), "inserting new recipe");
        recipes::repo::insert(&self.db, &recipe).await
    }

    async fn update_recipe(&self, id: i32, changes: RecipeChanges) -> Result<(), StoreError> {
        info!(id, "updating recipe");
        recipes::repo::update(&self.db, id, &changes).await
    }

    async fn insert_recipe_ingredient(
        &self,
        recipe_id: i32,
        ingredient_ids: Vec<i32>,
    ) -> Result<(), StoreError> {
        info!(recipe_id, ingredients = ingredient_ids.len(), "linking ingredients");
        recipes::repo::insert_ingredients(&self.db, recipe_id, &ingredient_ids).await
    }

    async fn get_recipes(&self, category: &str) -> Result<Vec<Recipe>, StoreError> {
        debug!(category, "listing recipes");
        recipes::repo::list(&self.db, category).await
    }

    async fn get_recipe_with_ingredients(
        &self,
        recipe_id: i32,
    ) -> Result<RecipeWithIngredients, StoreError> {
        debug!(recipe_id, "getting recipe with ingredients");
        recipes::repo::get_with_ingredients(&self.db, recipe_id).await
    }

    async fn insert_ingredient(
        &self,
        name: &str,
        amount: &str,
        url: &str,
        is_available: bool,
    ) -> Result<i32, StoreError> {
        info!(name, "inserting new ingredient");
        ingredients::repo::insert(&self.db, name, amount, url, is_available).await
    }

    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, StoreError> {
        debug!("listing ingredients");
        ingredients::repo::list(&self.db).await
    }
}

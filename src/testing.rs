//! In-memory [`RecipeStore`] used by router tests.

use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::{
    error::StoreError,
    health::{HealthReport, PoolStats},
    ingredients::repo_types::Ingredient,
    recipes::repo_types::{NewRecipe, Recipe, RecipeChanges, RecipeWithIngredients},
    store::RecipeStore,
};

#[derive(Default)]
struct Tables {
    categories: BTreeMap<i32, String>,
    recipes: BTreeMap<i32, Recipe>,
    ingredients: BTreeMap<i32, Ingredient>,
    links: Vec<(i32, i32)>, // (ingredient_id, recipe_id)
    next_recipe_id: i32,
    next_ingredient_id: i32,
}

impl Tables {
    fn check_ingredients(&self, ids: &[i32]) -> Result<(), StoreError> {
        match ids.iter().find(|id| !self.ingredients.contains_key(*id)) {
            Some(id) => Err(StoreError::InvalidReference(format!("ingredient {id}"))),
            None => Ok(()),
        }
    }
}

pub struct MemoryStore {
    tables: Mutex<Tables>,
    down: bool,
}

impl MemoryStore {
    /// Store with the categories "Dinner" (1) and "Dessert" (2).
    pub fn seeded() -> Self {
        let mut tables = Tables {
            next_recipe_id: 1,
            next_ingredient_id: 1,
            ..Default::default()
        };
        tables.categories.insert(1, "Dinner".into());
        tables.categories.insert(2, "Dessert".into());
        Self {
            tables: Mutex::new(tables),
            down: false,
        }
    }

    pub fn unreachable() -> Self {
        Self {
            down: true,
            ..Self::seeded()
        }
    }
}

#[async_trait]
impl RecipeStore for MemoryStore {
    async fn health(&self) -> HealthReport {
        if self.down {
            return HealthReport::down("connection refused");
        }
        HealthReport::up(PoolStats {
            open_connections: 1,
            in_use: 0,
            idle: 1,
            max_connections: 10,
        })
    }

    async fn close(&self) {}

    async fn insert_recipe(&self, recipe: NewRecipe) -> Result<i32, StoreError> {
        let mut t = self.tables.lock().unwrap();
        if !t.categories.contains_key(&recipe.category_id) {
            return Err(StoreError::InvalidReference(format!(
                "category {}",
                recipe.category_id
            )));
        }
        t.check_ingredients(&recipe.ingredient_ids)?;

        let id = t.next_recipe_id;
        t.next_recipe_id += 1;
        t.recipes.insert(
            id,
            Recipe {
                id,
                name: recipe.name,
                description: recipe.description,
                long_description: recipe.long_description,
                url: recipe.url,
                category_id: recipe.category_id,
            },
        );
        t.links
            .extend(recipe.ingredient_ids.iter().map(|ingredient_id| (*ingredient_id, id)));
        Ok(id)
    }

    async fn update_recipe(&self, id: i32, changes: RecipeChanges) -> Result<(), StoreError> {
        let mut t = self.tables.lock().unwrap();
        let recipe = t
            .recipes
            .get_mut(&id)
            .ok_or_else(|| StoreError::NotFound(format!("recipe {id}")))?;
        recipe.name = changes.name;
        recipe.description = changes.description;
        recipe.url = changes.url;
        Ok(())
    }

    async fn insert_recipe_ingredient(
        &self,
        recipe_id: i32,
        ingredient_ids: Vec<i32>,
    ) -> Result<(), StoreError> {
        let mut t = self.tables.lock().unwrap();
        if !t.recipes.contains_key(&recipe_id) {
            return Err(StoreError::NotFound(format!("recipe {recipe_id}")));
        }
        t.check_ingredients(&ingredient_ids)?;
        t.links
            .extend(ingredient_ids.into_iter().map(|ingredient_id| (ingredient_id, recipe_id)));
        Ok(())
    }

    async fn get_recipes(&self, category: &str) -> Result<Vec<Recipe>, StoreError> {
        let t = self.tables.lock().unwrap();
        Ok(t.recipes
            .values()
            .filter(|r| {
                category.is_empty()
                    || t.categories.get(&r.category_id).map(String::as_str) == Some(category)
            })
            .cloned()
            .collect())
    }

    async fn get_recipe_with_ingredients(
        &self,
        recipe_id: i32,
    ) -> Result<RecipeWithIngredients, StoreError> {
        let t = self.tables.lock().unwrap();
        let recipe = t
            .recipes
            .get(&recipe_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(format!("recipe {recipe_id}")))?;
        let ingredients = t
            .links
            .iter()
            .filter(|(_, r)| *r == recipe_id)
            .filter_map(|(i, _)| t.ingredients.get(i).cloned())
            .collect();
        Ok(RecipeWithIngredients {
            recipe,
            ingredients,
        })
    }

    async fn insert_ingredient(
        &self,
        name: &str,
        amount: &str,
        url: &str,
        is_available: bool,
    ) -> Result<i32, StoreError> {
        let mut t = self.tables.lock().unwrap();
        let id = t.next_ingredient_id;
        t.next_ingredient_id += 1;
        t.ingredients.insert(
            id,
            Ingredient {
                id,
                name: name.into(),
                amount: amount.into(),
                url: url.into(),
                is_available,
            },
        );
        Ok(id)
    }

    async fn get_ingredients(&self) -> Result<Vec<Ingredient>, StoreError> {
        Ok(self.tables.lock().unwrap().ingredients.values().cloned().collect())
    }
}

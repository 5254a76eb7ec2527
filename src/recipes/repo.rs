use sqlx::{PgConnection, PgPool};

use super::repo_types::{NewRecipe, Recipe, RecipeChanges, RecipeWithIngredients};
use crate::{error::StoreError, ingredients::repo_types::Ingredient};

const RECIPE_COLUMNS: &str = r#"
    r.id, r.name, r.description, r.long_description, r.imageurl AS url, r.category_id
"#;

/// Insert a recipe and link its ingredients in one transaction.
pub async fn insert(db: &PgPool, recipe: &NewRecipe) -> Result<i32, StoreError> {
    let mut tx = db.begin().await?;

    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO recipe (name, description, long_description, imageurl, category_id)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
    )
    .bind(&recipe.name)
    .bind(&recipe.description)
    .bind(&recipe.long_description)
    .bind(&recipe.url)
    .bind(recipe.category_id)
    .fetch_one(&mut *tx)
    .await?;

    link_ingredients(&mut tx, id, &recipe.ingredient_ids).await?;

    tx.commit().await?;
    Ok(id)
}

/// Link ingredients to an existing recipe. All rows are added or none.
pub async fn insert_ingredients(
    db: &PgPool,
    recipe_id: i32,
    ingredient_ids: &[i32],
) -> Result<(), StoreError> {
    let mut tx = db.begin().await?;

    let exists: Option<i32> = sqlx::query_scalar("SELECT id FROM recipe WHERE id = $1")
        .bind(recipe_id)
        .fetch_optional(&mut *tx)
        .await?;
    if exists.is_none() {
        return Err(StoreError::NotFound(format!("recipe {recipe_id}")));
    }

    link_ingredients(&mut tx, recipe_id, ingredient_ids).await?;

    tx.commit().await?;
    Ok(())
}

async fn link_ingredients(
    conn: &mut PgConnection,
    recipe_id: i32,
    ingredient_ids: &[i32],
) -> Result<(), StoreError> {
    if ingredient_ids.is_empty() {
        return Ok(());
    }

    sqlx::query(
        r#"
        INSERT INTO ingredient_recipe (ingredient_id, recipe_id)
        SELECT ingredient_id, $2
        FROM UNNEST($1::int4[]) AS ingredient_id
        "#,
    )
    .bind(ingredient_ids)
    .bind(recipe_id)
    .execute(conn)
    .await?;
    Ok(())
}

pub async fn update(db: &PgPool, id: i32, changes: &RecipeChanges) -> Result<(), StoreError> {
    let result = sqlx::query(
        r#"
        UPDATE recipe
        SET name = $2, description = $3, imageurl = $4
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(&changes.name)
    .bind(&changes.description)
    .bind(&changes.url)
    .execute(db)
    .await?;

    if result.rows_affected() == 0 {
        return Err(StoreError::NotFound(format!("recipe {id}")));
    }
    Ok(())
}

/// All recipes, or those whose category name matches exactly.
pub async fn list(db: &PgPool, category: &str) -> Result<Vec<Recipe>, StoreError> {
    let rows = if category.is_empty() {
        sqlx::query_as::<_, Recipe>(&format!(
            "SELECT {RECIPE_COLUMNS} FROM recipe r ORDER BY r.id"
        ))
        .fetch_all(db)
        .await?
    } else {
        sqlx::query_as::<_, Recipe>(&format!(
            r#"
            SELECT {RECIPE_COLUMNS}
            FROM recipe r
            JOIN category c ON r.category_id = c.id
            WHERE c.name = $1
            ORDER BY r.id
            "#
        ))
        .bind(category)
        .fetch_all(db)
        .await?
    };
    Ok(rows)
}

pub async fn get_with_ingredients(
    db: &PgPool,
    recipe_id: i32,
) -> Result<RecipeWithIngredients, StoreError> {
    let recipe = sqlx::query_as::<_, Recipe>(&format!(
        "SELECT {RECIPE_COLUMNS} FROM recipe r WHERE r.id = $1"
    ))
    .bind(recipe_id)
    .fetch_optional(db)
    .await?
    .ok_or_else(|| StoreError::NotFound(format!("recipe {recipe_id}")))?;

    let ingredients = sqlx::query_as::<_, Ingredient>(
        r#"
        SELECT i.id, i.name, i.amount, i.imageurl AS url, i.isavailable AS is_available
        FROM ingredient i
        INNER JOIN ingredient_recipe ir ON i.id = ir.ingredient_id
        WHERE ir.recipe_id = $1
        ORDER BY i.id
        "#,
    )
    .bind(recipe_id)
    .fetch_all(db)
    .await?;

    Ok(RecipeWithIngredients {
        recipe,
        ingredients,
    })
}

use sqlx::PgPool;

use super::repo_types::Ingredient;
use crate::error::StoreError;

pub async fn insert(
    db: &PgPool,
    name: &str,
    amount: &str,
    url: &str,
    is_available: bool,
) -> Result<i32, StoreError> {
    let id: i32 = sqlx::query_scalar(
        r#"
        INSERT INTO ingredient (name, amount, imageurl, isavailable)
        VALUES ($1, $2, $3, $4)
        RETURNING id
        "#,
    )
    .bind(name)
    .bind(amount)
    .bind(url)
    .bind(is_available)
    .fetch_one(db)
    .await?;
    Ok(id)
}

pub async fn list(db: &PgPool) -> Result<Vec<Ingredient>, StoreError> {
    let rows = sqlx::query_as::<_, Ingredient>(
        r#"
        SELECT i.id, i.name, i.amount, i.imageurl AS url, i.isavailable AS is_available
        FROM ingredient i
        ORDER BY i.id
        "#,
    )
    .fetch_all(db)
    .await?;
    Ok(rows)
}

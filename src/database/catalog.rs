//! Database functions for the menu catalog.
//!
//! Catalog rows are never physically deleted: "removal" flips the
//! availability flag so historical order lines keep a valid reference.

use super::models::MenuItem;
use sqlx::PgPool;

/// All items currently offered, in storage (id) order.
pub async fn list_available(pool: &PgPool) -> Result<Vec<MenuItem>, sqlx::Error> {
    sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, price_cents, is_available FROM menu_items WHERE is_available = TRUE ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// One item by id, regardless of availability.
pub async fn get_item(pool: &PgPool, item_id: i32) -> Result<Option<MenuItem>, sqlx::Error> {
    sqlx::query_as::<_, MenuItem>(
        "SELECT id, name, price_cents, is_available FROM menu_items WHERE id = $1",
    )
    .bind(item_id)
    .fetch_optional(pool)
    .await
}

/// Inserts a new available item and returns its id. Callers validate the
/// name and price (non-empty, > 0) before this is reached.
pub async fn add_item(pool: &PgPool, name: &str, price_cents: i64) -> Result<i32, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO menu_items (name, price_cents, is_available) VALUES ($1, $2, TRUE) RETURNING id",
    )
    .bind(name)
    .bind(price_cents)
    .fetch_one(pool)
    .await
}

/// Soft delete: flips availability off. Returns `false` for an unknown id.
pub async fn retire_item(pool: &PgPool, item_id: i32) -> Result<bool, sqlx::Error> {
    let result = sqlx::query("UPDATE menu_items SET is_available = FALSE WHERE id = $1")
        .bind(item_id)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}

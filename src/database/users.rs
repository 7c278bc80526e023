//! Database functions for user rows and the admin roster.
//!
//! Every admin-only handler calls [`is_admin`] on every invocation; there is
//! no cached authorization, so a demoted admin loses access on their very
//! next action.

use serenity::model::id::UserId;
use sqlx::PgPool;

/// Creates the user row if absent; updates the stored username in place when
/// it changed. Idempotent.
pub async fn ensure_user(
    pool: &PgPool,
    user_id: UserId,
    username: Option<&str>,
) -> Result<(), sqlx::Error> {
    let discord_id = user_id.get() as i64;
    match username {
        Some(name) => {
            sqlx::query(
                r#"INSERT INTO users (discord_id, username) VALUES ($1, $2)
                ON CONFLICT (discord_id) DO UPDATE SET username = EXCLUDED.username
                WHERE users.username IS DISTINCT FROM EXCLUDED.username"#,
            )
            .bind(discord_id)
            .bind(name)
            .execute(pool)
            .await?;
        }
        None => {
            sqlx::query("INSERT INTO users (discord_id) VALUES ($1) ON CONFLICT (discord_id) DO NOTHING")
                .bind(discord_id)
                .execute(pool)
                .await?;
        }
    }
    Ok(())
}

pub async fn is_admin(pool: &PgPool, user_id: UserId) -> Result<bool, sqlx::Error> {
    let discord_id = user_id.get() as i64;
    sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM users WHERE discord_id = $1 AND is_admin = TRUE)",
    )
    .bind(discord_id)
    .fetch_one(pool)
    .await
}

/// Discord ids of every current admin, in storage order. Used for the roster
/// listing and for new-order notification fan-out.
pub async fn list_admins(pool: &PgPool) -> Result<Vec<i64>, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        "SELECT discord_id FROM users WHERE is_admin = TRUE ORDER BY id",
    )
    .fetch_all(pool)
    .await
}

/// Grants the admin flag to `target`, creating the row if needed.
///
/// Returns `Ok(false)` without touching anything when `acting` is not an
/// admin themselves. Idempotent when the target already holds the flag.
pub async fn add_admin(pool: &PgPool, acting: UserId, target: i64) -> Result<bool, sqlx::Error> {
    let acting_id = acting.get() as i64;
    let mut tx = pool.begin().await?;
    let acting_is_admin: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM users WHERE discord_id = $1 AND is_admin = TRUE)",
    )
    .bind(acting_id)
    .fetch_one(&mut *tx)
    .await?;
    if !acting_is_admin {
        return Ok(false);
    }
    sqlx::query(
        r#"INSERT INTO users (discord_id, is_admin) VALUES ($1, TRUE)
        ON CONFLICT (discord_id) DO UPDATE SET is_admin = TRUE"#,
    )
    .bind(target)
    .execute(&mut *tx)
    .await?;
    tx.commit().await?;
    Ok(true)
}

/// Clears the admin flag on `target`.
///
/// Returns `Ok(false)` when `acting` is not an admin or the target has no
/// row; a missing target is never created. Nothing at this layer stops an
/// admin from removing their own flag — the roster UI just never offers the
/// self button.
pub async fn remove_admin(pool: &PgPool, acting: UserId, target: i64) -> Result<bool, sqlx::Error> {
    let acting_id = acting.get() as i64;
    let acting_is_admin: bool = sqlx::query_scalar(
        "SELECT EXISTS(SELECT 1 FROM users WHERE discord_id = $1 AND is_admin = TRUE)",
    )
    .bind(acting_id)
    .fetch_one(pool)
    .await?;
    if !acting_is_admin {
        return Ok(false);
    }
    let result = sqlx::query("UPDATE users SET is_admin = FALSE WHERE discord_id = $1")
        .bind(target)
        .execute(pool)
        .await?;
    Ok(result.rows_affected() == 1)
}

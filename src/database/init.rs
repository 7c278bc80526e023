//! Pool construction and schema bootstrap.
//!
//! There is no migration tooling: the four tables (plus the status enum) are
//! created on startup if absent, inside the schema named by the
//! configuration. All queries run unqualified and rely on `search_path`.

use crate::config::DbConfig;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// A type alias for the database connection pool (`Pool<Postgres>`), used
/// throughout the application as the single shared persistence handle.
pub type DbPool = PgPool;

/// Connects to Postgres using either `DATABASE_URL` or the discrete
/// credential parts, pinning `search_path` to the configured schema.
pub async fn connect(cfg: &DbConfig) -> Result<PgPool, sqlx::Error> {
    let options = match &cfg.url {
        Some(url) => url.parse::<PgConnectOptions>()?,
        None => PgConnectOptions::new()
            .host(&cfg.host)
            .port(cfg.port)
            .username(&cfg.user)
            .password(&cfg.password)
            .database(&cfg.name),
    }
    .options([("search_path", cfg.schema.as_str())]);

    PgPoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Creates the schema namespace and all tables if they do not exist yet.
pub async fn create_tables(pool: &PgPool, schema: &str) -> Result<(), sqlx::Error> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS \"{}\"", schema))
        .execute(pool)
        .await?;
    let statements = [
        r#"DO $$ BEGIN
            CREATE TYPE order_status AS ENUM ('Accepted', 'Ready');
        EXCEPTION WHEN duplicate_object THEN NULL; END $$"#,
        r#"CREATE TABLE IF NOT EXISTS users (
            id SERIAL PRIMARY KEY,
            discord_id BIGINT UNIQUE NOT NULL,
            username TEXT,
            is_admin BOOLEAN NOT NULL DEFAULT FALSE
        )"#,
        r#"CREATE TABLE IF NOT EXISTS menu_items (
            id SERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            price_cents BIGINT NOT NULL,
            is_available BOOLEAN NOT NULL DEFAULT TRUE
        )"#,
        r#"CREATE TABLE IF NOT EXISTS orders (
            id SERIAL PRIMARY KEY,
            discord_id BIGINT NOT NULL,
            status order_status NOT NULL DEFAULT 'Accepted',
            created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
            desired_time TEXT
        )"#,
        r#"CREATE TABLE IF NOT EXISTS order_items (
            id SERIAL PRIMARY KEY,
            order_id INTEGER NOT NULL REFERENCES orders(id),
            menu_item_id INTEGER NOT NULL REFERENCES menu_items(id),
            quantity BIGINT NOT NULL,
            price_cents BIGINT NOT NULL
        )"#,
    ];
    for stmt in statements {
        sqlx::query(stmt).execute(pool).await?;
    }
    Ok(())
}

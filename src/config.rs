//! Environment-driven configuration.
//!
//! The Discord token and guild id are required and abort startup when absent.
//! Database credentials are assembled from discrete parts with the same
//! defaults a stock local Postgres would use; `DATABASE_URL` overrides the
//! parts wholesale.

use std::env;

pub struct DbConfig {
    /// Full connection URL; when set, the discrete parts below are ignored.
    pub url: Option<String>,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
    /// Schema namespace all tables live in (applied via `search_path`).
    pub schema: String,
}

pub struct Config {
    pub token: String,
    pub guild_id: u64,
    pub db: DbConfig,
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    /// Reads configuration from the environment (after `dotenv` has run).
    ///
    /// Panics with a descriptive message when a required value is missing or
    /// malformed; there is no sensible way to run without them.
    pub fn from_env() -> Self {
        let token = env::var("DISCORD_TOKEN").expect("Expected DISCORD_TOKEN in the environment.");
        let guild_id = env::var("SERVER_ID")
            .expect("Expected SERVER_ID in the environment.")
            .parse::<u64>()
            .expect("SERVER_ID must be a valid number.");
        let port = env_or("DB_PORT", "5432")
            .parse::<u16>()
            .expect("DB_PORT must be a valid port number.");
        Self {
            token,
            guild_id,
            db: DbConfig {
                url: env::var("DATABASE_URL").ok(),
                user: env_or("DB_USER", "postgres"),
                password: env_or("DB_PASSWORD", ""),
                host: env_or("DB_HOST", "localhost"),
                port,
                name: env_or("DB_NAME", "postgres"),
                schema: env_or("DB_SCHEMA", "public"),
            },
        }
    }
}

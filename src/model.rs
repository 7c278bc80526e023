//! Shared application state stored in Serenity's global context.

use crate::session::SessionStore;
use serenity::prelude::TypeMapKey;
use sqlx::PgPool;
use std::sync::Arc;

/// The central, shared state of the application. An `Arc<AppState>` is stored
/// in the global context for access from any command or event handler.
pub struct AppState {
    /// The connection pool for the PostgreSQL database.
    pub db: PgPool,
    /// Per-user ephemeral sessions (cart + pending text input).
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(db: PgPool) -> Self {
        Self {
            db,
            sessions: SessionStore::default(),
        }
    }

    pub async fn from_ctx(ctx: &serenity::prelude::Context) -> Option<Arc<Self>> {
        ctx.data.read().await.get::<AppState>().cloned()
    }
}

impl TypeMapKey for AppState {
    type Value = Arc<AppState>;
}

//! Shared interaction utility helpers (single defer + safe edit wrapper).

use crate::database::users;
use crate::ui::style;
use crate::AppState;
use serenity::builder::{CreateActionRow, CreateEmbed, EditInteractionResponse};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;

/// Acknowledge a component interaction, ignoring duplicate/late errors.
pub async fn defer_component(ctx: &Context, c: &ComponentInteraction) {
    if let Err(e) = c.defer(&ctx.http).await {
        tracing::debug!(target: "ui.defer", cid = %c.data.custom_id, error = ?e, "defer failed (already acknowledged?)");
    }
}

/// Edit the original interaction response; logs failure with a tag for
/// observability.
pub async fn edit_component(
    ctx: &Context,
    c: &ComponentInteraction,
    tag: &str,
    builder: EditInteractionResponse,
) {
    if let Err(e) = c.edit_response(&ctx.http, builder).await {
        tracing::error!(target: "ui.edit", cid = %c.data.custom_id, tag = %tag, error = ?e, "edit_response failed");
    }
}

/// Convenience wrapper rendering an embed plus button rows.
pub async fn show(
    ctx: &Context,
    c: &ComponentInteraction,
    tag: &str,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) {
    edit_component(
        ctx,
        c,
        tag,
        EditInteractionResponse::new().embed(embed).components(components),
    )
    .await;
}

/// Generic persistence-failure response: log the detail, tell the user to
/// retry later.
pub async fn show_db_error(ctx: &Context, c: &ComponentInteraction, tag: &str, e: sqlx::Error) {
    tracing::error!(target: "ui.db", cid = %c.data.custom_id, tag = %tag, error = ?e, "database operation failed");
    let embed = style::error_embed("Something went wrong", "Please try again later.");
    show(ctx, c, tag, embed, vec![]).await;
}

/// Re-checks the admin flag for the pressing user; renders an access-denied
/// message and returns `false` when they are not an admin. Called at the top
/// of every admin-only handler on every invocation — authorization is never
/// cached.
pub async fn require_admin(ctx: &Context, c: &ComponentInteraction, state: &AppState) -> bool {
    match users::is_admin(&state.db, c.user.id).await {
        Ok(true) => true,
        Ok(false) => {
            let embed = style::error_embed("Access denied", "You don't have access to this function.");
            show(ctx, c, "auth.denied", embed, vec![]).await;
            false
        }
        Err(e) => {
            show_db_error(ctx, c, "auth.check", e).await;
            false
        }
    }
}

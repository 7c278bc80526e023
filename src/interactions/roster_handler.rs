//! Handles the `roster_*` button family: granting and revoking the admin
//! flag. Promotion resolves a mention or a raw numeric id from a follow-up
//! message.

use super::ids;
use super::util::{defer_component, require_admin, show, show_db_error};
use crate::database::users;
use crate::session::PendingInput;
use crate::ui::buttons::Btn;
use crate::ui::style::{self, COLOR_ADMIN, COLOR_SUCCESS};
use crate::AppState;
use serenity::builder::{CreateActionRow, CreateEmbed, CreateMessage};
use serenity::model::application::ComponentInteraction;
use serenity::model::channel::Message;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, state: Arc<AppState>) {
    defer_component(ctx, component).await;
    if !require_admin(ctx, component, &state).await {
        return;
    }
    let custom_id = component.data.custom_id.clone();
    match custom_id.as_str() {
        ids::ROSTER_HOME => {
            let (embed, rows) = panel_view();
            show(ctx, component, "roster.panel", embed, rows).await;
        }
        ids::ROSTER_ADD => {
            state
                .sessions
                .with(component.user.id.get(), |s| {
                    s.pending = PendingInput::AwaitingAdminTarget;
                })
                .await;
            let embed = CreateEmbed::new()
                .description("✏️ Mention the user to promote, or send their numeric id.")
                .color(COLOR_ADMIN);
            let rows = vec![CreateActionRow::Buttons(vec![Btn::danger(
                ids::ROSTER_CANCEL,
                "❌ Cancel",
            )])];
            show(ctx, component, "roster.add", embed, rows).await;
        }
        ids::ROSTER_REMOVE => show_remove_list(ctx, component, &state, None).await,
        ids::ROSTER_CANCEL => {
            state
                .sessions
                .with(component.user.id.get(), |s| s.cancel_pending())
                .await;
            let (embed, rows) = panel_view();
            show(ctx, component, "roster.cancel", embed, rows).await;
        }
        other => {
            if let Some(target) = ids::parse_id_suffix(other, ids::ROSTER_DROP_PREFIX) {
                drop_admin(ctx, component, &state, target).await;
            }
        }
    }
}

fn panel_view() -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title("👥 Admin management")
        .description("Grant or revoke admin access.")
        .color(COLOR_ADMIN);
    let rows = vec![
        CreateActionRow::Buttons(vec![Btn::secondary(ids::ROSTER_ADD, "➕ Add admin")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::ROSTER_REMOVE, "➖ Remove admin")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::ADMIN_PANEL, "🔙 Back")]),
    ];
    (embed, rows)
}

/// Lists current admins with a revoke button each. The pressing admin is
/// left off the list so the UI never offers self-demotion.
async fn show_remove_list(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
    notice: Option<&str>,
) {
    let admins = match users::list_admins(&state.db).await {
        Ok(list) => list,
        Err(e) => return show_db_error(ctx, component, "roster.remove", e).await,
    };
    let self_id = component.user.id.get() as i64;
    let others: Vec<i64> = admins.into_iter().filter(|id| *id != self_id).collect();

    let mut text = String::new();
    if let Some(n) = notice {
        text.push_str(n);
        text.push_str("\n\n");
    }
    let mut rows: Vec<CreateActionRow> = Vec::new();
    if others.is_empty() {
        text.push_str("You are the only admin.");
    } else {
        text.push_str("Pick an admin to revoke:");
        for chunk in others.chunks(2).take(4) {
            let buttons = chunk
                .iter()
                .map(|id| {
                    Btn::danger(
                        &format!("{}{}", ids::ROSTER_DROP_PREFIX, id),
                        &format!("❌ id {}", id),
                    )
                })
                .collect();
            rows.push(CreateActionRow::Buttons(buttons));
        }
    }
    rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
        ids::ROSTER_HOME,
        "🔙 Back",
    )]));
    let embed = CreateEmbed::new().description(text).color(COLOR_ADMIN);
    show(ctx, component, "roster.remove", embed, rows).await;
}

async fn drop_admin(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
    target: i64,
) {
    match users::remove_admin(&state.db, component.user.id, target).await {
        Ok(true) => {
            tracing::info!(target: "roster", by = component.user.id.get(), target, "admin revoked");
            show_remove_list(ctx, component, state, Some("✅ Admin access revoked.")).await;
        }
        Ok(false) => {
            show_remove_list(ctx, component, state, Some("That user is not an admin.")).await;
        }
        Err(e) => show_db_error(ctx, component, "roster.drop", e).await,
    }
}

/// Handles the follow-up message naming the user to promote. A mention wins
/// over the raw content; anything unparseable leaves the step armed and asks
/// again.
pub async fn handle_text(ctx: &Context, msg: &Message, state: &AppState) {
    let is_admin = users::is_admin(&state.db, msg.author.id).await.unwrap_or(false);
    if !is_admin {
        return;
    }

    let target: Option<i64> = msg
        .mentions
        .first()
        .map(|u| u.id.get() as i64)
        .or_else(|| msg.content.trim().parse::<i64>().ok());
    let Some(target) = target else {
        let embed = style::error_embed(
            "Couldn't find that user",
            "Mention them directly, or send their numeric id.",
        );
        send(ctx, msg, "roster.text.badtarget", embed, vec![]).await;
        return;
    };

    state
        .sessions
        .with(msg.author.id.get(), |s| s.cancel_pending())
        .await;

    match users::add_admin(&state.db, msg.author.id, target).await {
        Ok(true) => {
            tracing::info!(target: "roster", by = msg.author.id.get(), target, "admin granted");
            let embed = CreateEmbed::new()
                .description(format!("✅ <@{target}> is now an admin."))
                .color(COLOR_SUCCESS);
            let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
                ids::ROSTER_HOME,
                "🔙 Admin management",
            )])];
            send(ctx, msg, "roster.text.added", embed, rows).await;
        }
        Ok(false) => {
            // The acting user lost admin between arming the step and now.
            let embed =
                style::error_embed("Access denied", "You don't have access to this function.");
            send(ctx, msg, "roster.text.denied", embed, vec![]).await;
        }
        Err(e) => {
            tracing::error!(target: "roster", error = ?e, "admin grant failed");
            let embed = style::error_embed("Something went wrong", "Please try again later.");
            send(ctx, msg, "roster.text.err", embed, vec![]).await;
        }
    }
}

async fn send(
    ctx: &Context,
    msg: &Message,
    tag: &str,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) {
    let builder = CreateMessage::new().embed(embed).components(components);
    if let Err(e) = msg.channel_id.send_message(&ctx.http, builder).await {
        tracing::error!(target: "ui.send", tag = %tag, error = ?e, "send_message failed");
    }
}

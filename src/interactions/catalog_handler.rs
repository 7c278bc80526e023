//! Handles the `catalog_*` button family and the two-step text flow that
//! adds a menu item (name message, then price message).

use super::ids;
use super::util::{defer_component, require_admin, show, show_db_error};
use crate::database::models::MenuItem;
use crate::database::{catalog, users};
use crate::session::PendingInput;
use crate::ui::buttons::Btn;
use crate::ui::style::{self, COLOR_ADMIN, COLOR_SUCCESS};
use crate::util::{format_price, parse_price};
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
        ids::CATALOG_HOME => {
            let (embed, rows) = panel_view();
            show(ctx, component, "catalog.panel", embed, rows).await;
        }
        ids::CATALOG_ADD => {
            state
                .sessions
                .with(component.user.id.get(), |s| {
                    s.pending = PendingInput::AwaitingItemName;
                })
                .await;
            let embed = CreateEmbed::new()
                .description("✏️ Send the name of the new item as a message.")
                .color(COLOR_ADMIN);
            let rows = vec![CreateActionRow::Buttons(vec![Btn::danger(
                ids::CATALOG_CANCEL,
                "❌ Cancel",
            )])];
            show(ctx, component, "catalog.add", embed, rows).await;
        }
        ids::CATALOG_LIST => show_list(ctx, component, &state, None).await,
        ids::CATALOG_CANCEL => {
            state
                .sessions
                .with(component.user.id.get(), |s| s.cancel_pending())
                .await;
            let (embed, rows) = panel_view();
            show(ctx, component, "catalog.cancel", embed, rows).await;
        }
        other => {
            if let Some(item_id) = ids::parse_id_suffix(other, ids::CATALOG_RETIRE_PREFIX) {
                retire(ctx, component, &state, item_id as i32).await;
            }
        }
    }
}

fn panel_view() -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title("🍽 Menu management")
        .description("Add new items or remove existing ones.")
        .color(COLOR_ADMIN);
    let rows = vec![
        CreateActionRow::Buttons(vec![Btn::secondary(ids::CATALOG_ADD, "➕ Add item")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::CATALOG_LIST, "➖ Remove item")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::ADMIN_PANEL, "🔙 Back")]),
    ];
    (embed, rows)
}

fn list_view(items: &[MenuItem], notice: Option<&str>) -> (CreateEmbed, Vec<CreateActionRow>) {
    let mut text = String::new();
    if let Some(n) = notice {
        text.push_str(n);
        text.push_str("\n\n");
    }
    if items.is_empty() {
        text.push_str("The menu is empty.");
        let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
            ids::CATALOG_HOME,
            "🔙 Back",
        )])];
        return (CreateEmbed::new().description(text).color(COLOR_ADMIN), rows);
    }
    text.push_str("Pick an item to remove from the menu:");
    let mut rows: Vec<CreateActionRow> = Vec::new();
    // Discord caps a message at five rows; keep one for navigation.
    for chunk in items.chunks(2).take(4) {
        let buttons = chunk
            .iter()
            .map(|item| {
                Btn::danger(
                    &format!("{}{}", ids::CATALOG_RETIRE_PREFIX, item.id),
                    &format!("❌ {} — {}", item.name, format_price(item.price_cents)),
                )
            })
            .collect();
        rows.push(CreateActionRow::Buttons(buttons));
    }
    rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
        ids::CATALOG_HOME,
        "🔙 Back",
    )]));
    (CreateEmbed::new().description(text).color(COLOR_ADMIN), rows)
}

async fn show_list(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
    notice: Option<&str>,
) {
    match catalog::list_available(&state.db).await {
        Ok(items) => {
            let (embed, rows) = list_view(&items, notice);
            show(ctx, component, "catalog.list", embed, rows).await;
        }
        Err(e) => show_db_error(ctx, component, "catalog.list", e).await,
    }
}

async fn retire(ctx: &Context, component: &ComponentInteraction, state: &AppState, item_id: i32) {
    match catalog::retire_item(&state.db, item_id).await {
        Ok(true) => {
            show_list(ctx, component, state, Some("✅ Item removed from the menu.")).await;
        }
        Ok(false) => {
            show_list(ctx, component, state, Some("That item was already gone.")).await;
        }
        Err(e) => show_db_error(ctx, component, "catalog.retire", e).await,
    }
}

/// Handles a plain message while a catalog-add step is armed. The caller has
/// already matched the pending flag; non-admins are ignored silently so the
/// flow can't be hijacked by an unrelated message in the channel.
pub async fn handle_text(ctx: &Context, msg: &Message, state: &AppState, pending: PendingInput) {
    let is_admin = users::is_admin(&state.db, msg.author.id).await.unwrap_or(false);
    if !is_admin {
        return;
    }

    match pending {
        PendingInput::AwaitingItemName => {
            let name = msg.content.trim().to_string();
            if name.is_empty() {
                return;
            }
            state
                .sessions
                .with(msg.author.id.get(), |s| {
                    s.pending = PendingInput::AwaitingItemPrice { name: name.clone() };
                })
                .await;
            let embed = CreateEmbed::new()
                .description(format!(
                    "💰 Now send the price for **{name}** (for example `150` or `99.50`)."
                ))
                .color(COLOR_ADMIN);
            let rows = vec![CreateActionRow::Buttons(vec![Btn::danger(
                ids::CATALOG_CANCEL,
                "❌ Cancel",
            )])];
            send(ctx, msg, "catalog.text.name", embed, rows).await;
        }
        PendingInput::AwaitingItemPrice { name } => {
            let Some(price_cents) = parse_price(&msg.content) else {
                // Keep the step armed so the admin can just try again.
                let embed = style::error_embed(
                    "That doesn't look like a price",
                    "Send a positive number, like `150` or `99.50`.",
                );
                send(ctx, msg, "catalog.text.badprice", embed, vec![]).await;
                return;
            };
            match catalog::add_item(&state.db, &name, price_cents).await {
                Ok(item_id) => {
                    state
                        .sessions
                        .with(msg.author.id.get(), |s| s.cancel_pending())
                        .await;
                    tracing::info!(target: "catalog.add", item_id, name = %name, price_cents, "menu item added");
                    let embed = CreateEmbed::new()
                        .description(format!(
                            "✅ **{name}** added to the menu at {}.",
                            format_price(price_cents)
                        ))
                        .color(COLOR_SUCCESS);
                    let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
                        ids::CATALOG_HOME,
                        "🔙 Menu management",
                    )])];
                    send(ctx, msg, "catalog.text.added", embed, rows).await;
                }
                Err(e) => {
                    tracing::error!(target: "catalog.add", error = ?e, "menu item insert failed");
                    let embed =
                        style::error_embed("Something went wrong", "Please try again later.");
                    send(ctx, msg, "catalog.text.err", embed, vec![]).await;
                }
            }
        }
        _ => {}
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

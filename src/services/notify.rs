//! Best-effort direct-message notifications. The order is already committed
//! by the time these run; a closed DM or a deleted account only produces a
//! warning, never an error surfaced to the flow that triggered it.

use crate::database::models::OrderView;
use crate::interactions::ids;
use crate::database::{orders, users};
use crate::ui::buttons::Btn;
use crate::ui::style::{COLOR_ADMIN, COLOR_SUCCESS};
use crate::ui::views;
use crate::util::format_price;
use crate::AppState;
use serenity::builder::{CreateActionRow, CreateEmbed, CreateMessage};
use serenity::model::id::UserId;
use serenity::prelude::Context;

/// Fans a freshly placed order out to every admin, each DM carrying a
/// one-press "mark ready" button.
pub async fn order_placed(ctx: &Context, state: &AppState, order_id: i32) {
    let order = match orders::order_details(&state.db, order_id).await {
        Ok(Some(order)) => order,
        Ok(None) => {
            tracing::warn!(target: "notify", order_id, "order vanished before fan-out");
            return;
        }
        Err(e) => {
            tracing::warn!(target: "notify", order_id, error = ?e, "order lookup failed, fan-out skipped");
            return;
        }
    };
    let admins = match users::list_admins(&state.db).await {
        Ok(list) => list,
        Err(e) => {
            tracing::warn!(target: "notify", order_id, error = ?e, "admin roster lookup failed, fan-out skipped");
            return;
        }
    };

    let embed = CreateEmbed::new()
        .title(format!("🔔 New order #{}", order.id))
        .description(order_summary(&order))
        .color(COLOR_ADMIN);
    let rows = vec![CreateActionRow::Buttons(vec![Btn::success(
        &format!("{}{}", ids::ADMIN_READY_PREFIX, order.id),
        "✅ Order ready",
    )])];

    for admin_id in admins {
        let builder = CreateMessage::new().embed(embed.clone()).components(rows.clone());
        dm(ctx, admin_id, builder, order_id).await;
    }
}

/// Tells the purchaser their order is ready for pickup.
pub async fn order_ready(ctx: &Context, state: &AppState, order_id: i32) {
    let order = match orders::order_details(&state.db, order_id).await {
        Ok(Some(order)) => order,
        Ok(None) => return,
        Err(e) => {
            tracing::warn!(target: "notify", order_id, error = ?e, "order lookup failed, customer not notified");
            return;
        }
    };
    let embed = CreateEmbed::new()
        .title(format!("🎉 Order #{} is ready!", order.id))
        .description(format!(
            "{}💰 Total: {}\n\nCome pick it up — see you soon! ☕",
            views::order_lines_block(&order),
            format_price(order.total_cents())
        ))
        .color(COLOR_SUCCESS);
    let builder = CreateMessage::new().embed(embed);
    dm(ctx, order.discord_id, builder, order_id).await;
}

fn order_summary(order: &OrderView) -> String {
    let mut text = format!(
        "⏰ Pickup: {}\n👤 Customer: {}\n\n",
        order.desired_time.as_deref().unwrap_or("Not specified"),
        order
            .username
            .as_deref()
            .map(|u| u.to_string())
            .unwrap_or_else(|| format!("<@{}>", order.discord_id)),
    );
    text.push_str(&views::order_lines_block(order));
    text.push_str(&format!("\n💰 Total: {}", format_price(order.total_cents())));
    text
}

async fn dm(ctx: &Context, discord_id: i64, builder: CreateMessage, order_id: i32) {
    let user = UserId::new(discord_id as u64);
    let channel = match user.create_dm_channel(&ctx.http).await {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!(target: "notify", order_id, to = discord_id, error = ?e, "DM channel unavailable");
            return;
        }
    };
    if let Err(e) = channel.send_message(&ctx.http, builder).await {
        tracing::warn!(target: "notify", order_id, to = discord_id, error = ?e, "DM delivery failed");
    }
}

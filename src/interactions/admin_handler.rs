//! Handles the `admin_*` button family: the admin panel, order statistics,
//! and the active-order queue. Every entry point re-checks the admin flag.

use super::ids;
use super::util::{defer_component, require_admin, show, show_db_error};
use crate::database::models::{OrderStats, OrderView};
use crate::database::orders::{self, StatsPeriod};
use crate::services::notify;
use crate::ui::buttons::Btn;
use crate::ui::style::{self, COLOR_ADMIN};
use crate::ui::views;
use crate::util::format_price;
use crate::AppState;
use serenity::builder::{CreateActionRow, CreateEmbed};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, state: Arc<AppState>) {
    defer_component(ctx, component).await;
    if !require_admin(ctx, component, &state).await {
        return;
    }
    let custom_id = component.data.custom_id.clone();
    match custom_id.as_str() {
        ids::ADMIN_PANEL => {
            let (embed, rows) = panel_view();
            show(ctx, component, "admin.panel", embed, rows).await;
        }
        ids::ADMIN_STATS => show_stats(ctx, component, &state).await,
        ids::ADMIN_ORDERS => show_active_orders(ctx, component, &state, None).await,
        other => {
            if let Some(order_id) = ids::parse_id_suffix(other, ids::ADMIN_READY_PREFIX) {
                mark_ready(ctx, component, &state, order_id as i32).await;
            }
        }
    }
}

pub fn panel_view() -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title("👑 Admin panel")
        .description("Pick an action 👇")
        .color(COLOR_ADMIN);
    let rows = vec![
        CreateActionRow::Buttons(vec![Btn::secondary(ids::ADMIN_STATS, "📊 Order statistics")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::ADMIN_ORDERS, "📦 Manage orders")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::CATALOG_HOME, "🍽 Manage menu")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::ROSTER_HOME, "👥 Manage admins")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::NAV_HOME, "🔙 Back")]),
    ];
    (embed, rows)
}

fn stats_line(label: &str, stats: &OrderStats) -> String {
    format!(
        "🌟 **{}**\n📦 Orders: {}\n💰 Revenue: {}\n\n",
        label,
        stats.total_orders,
        format_price(stats.revenue_cents)
    )
}

async fn show_stats(ctx: &Context, component: &ComponentInteraction, state: &AppState) {
    let all_time = match orders::order_stats(&state.db, StatsPeriod::AllTime).await {
        Ok(s) => s,
        Err(e) => return show_db_error(ctx, component, "admin.stats", e).await,
    };
    let mut text = String::from("📊 **Order statistics**\n\n");
    text.push_str(&stats_line(StatsPeriod::AllTime.label(), &all_time));
    for period in [StatsPeriod::Day, StatsPeriod::Week, StatsPeriod::Month] {
        match orders::order_stats(&state.db, period).await {
            Ok(stats) => text.push_str(&stats_line(period.label(), &stats)),
            Err(e) => return show_db_error(ctx, component, "admin.stats", e).await,
        }
    }
    text.push_str(&format!(
        "**Current queue**\n🕒 Awaiting: {}\n✅ Fulfilled: {}\n\n",
        all_time.accepted, all_time.ready
    ));
    text.push_str("**Most recent orders**\n");
    for order in &all_time.recent {
        text.push_str(&format!(
            "#{} — {} — {}\n",
            order.id,
            order.status,
            format_price(order.total_cents)
        ));
    }

    let embed = CreateEmbed::new().description(text).color(COLOR_ADMIN);
    let rows = vec![
        CreateActionRow::Buttons(vec![Btn::secondary(ids::ADMIN_ORDERS, "📦 Manage orders")]),
        CreateActionRow::Buttons(vec![Btn::secondary(ids::ADMIN_PANEL, "🔙 Back")]),
    ];
    show(ctx, component, "admin.stats", embed, rows).await;
}

fn active_orders_view(list: &[OrderView], notice: Option<&str>) -> (CreateEmbed, Vec<CreateActionRow>) {
    if list.is_empty() {
        let embed = CreateEmbed::new()
            .description(match notice {
                Some(n) => format!("{n}\n\nNo active orders."),
                None => "No active orders.".to_string(),
            })
            .color(COLOR_ADMIN);
        let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
            ids::ADMIN_PANEL,
            "🔙 Back",
        )])];
        return (embed, rows);
    }

    let mut text = String::new();
    if let Some(n) = notice {
        text.push_str(n);
        text.push_str("\n\n");
    }
    text.push_str("📦 **Active orders**\n\n");
    let mut rows: Vec<CreateActionRow> = Vec::new();
    for order in list {
        text.push_str(&format!(
            "**Order #{}**\n⏰ Pickup: {}\n📱 Contact: {}\n",
            order.id,
            order.desired_time.as_deref().unwrap_or("Not specified"),
            order.username.as_deref().unwrap_or("(no username)"),
        ));
        text.push_str(&views::order_lines_block(order));
        text.push_str(&format!("💰 Total: {}\n\n", format_price(order.total_cents())));
        // One action row per order; Discord caps a message at five rows.
        if rows.len() < 4 {
            rows.push(CreateActionRow::Buttons(vec![Btn::success(
                &format!("{}{}", ids::ADMIN_READY_PREFIX, order.id),
                &format!("✅ Mark ready #{}", order.id),
            )]));
        }
    }
    rows.push(CreateActionRow::Buttons(vec![Btn::secondary(
        ids::ADMIN_PANEL,
        "🔙 Back",
    )]));
    let embed = CreateEmbed::new().description(text).color(COLOR_ADMIN);
    (embed, rows)
}

async fn show_active_orders(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
    notice: Option<&str>,
) {
    match orders::active_orders(&state.db).await {
        Ok(list) => {
            let (embed, rows) = active_orders_view(&list, notice);
            show(ctx, component, "admin.orders", embed, rows).await;
        }
        Err(e) => show_db_error(ctx, component, "admin.orders", e).await,
    }
}

async fn mark_ready(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
    order_id: i32,
) {
    match orders::mark_ready(&state.db, order_id).await {
        Ok(true) => {
            notify::order_ready(ctx, state, order_id).await;
            let notice = format!("✅ Order #{order_id} marked ready. The customer was notified.");
            show_active_orders(ctx, component, state, Some(&notice)).await;
        }
        Ok(false) => {
            let embed = style::error_embed("Not found", format!("Order #{order_id} does not exist."));
            let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
                ids::ADMIN_ORDERS,
                "🔙 Back to orders",
            )])];
            show(ctx, component, "admin.ready.missing", embed, rows).await;
        }
        Err(e) => show_db_error(ctx, component, "admin.ready", e).await,
    }
}

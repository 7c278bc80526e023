//! Handles the `cart_*` button family: viewing and clearing the cart,
//! checkout, and the pickup-time selection that commits the order.

use super::ids;
use super::util::{defer_component, show, show_db_error};
use crate::database::models::MenuItem;
use crate::database::{catalog, orders};
use crate::services::notify;
use crate::session::CartEntry;
use crate::ui::buttons::Btn;
use crate::ui::style::{self, COLOR_MAIN};
use crate::ui::views;
use crate::AppState;
use serenity::builder::{CreateActionRow, CreateEmbed};
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, state: Arc<AppState>) {
    defer_component(ctx, component).await;
    let custom_id = component.data.custom_id.clone();

    match custom_id.as_str() {
        ids::CART_VIEW => view_cart(ctx, component, &state).await,
        ids::CART_CLEAR => {
            state
                .sessions
                .with(component.user.id.get(), |s| s.clear_cart())
                .await;
            let embed = CreateEmbed::new()
                .description("Cart cleared!")
                .color(COLOR_MAIN);
            let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
                ids::SHOP_OPEN,
                "🔙 To the menu",
            )])];
            show(ctx, component, "cart.clear", embed, rows).await;
        }
        ids::CART_CHECKOUT => {
            let cart = state.sessions.cart(component.user.id.get()).await;
            if cart.is_empty() {
                let (embed, rows) = views::cart_view(&[]);
                show(ctx, component, "cart.checkout.empty", embed, rows).await;
            } else {
                let (embed, rows) = views::pickup_view();
                show(ctx, component, "cart.checkout", embed, rows).await;
            }
        }
        other => {
            if let Some(slot) = ids::parse_pickup_slot(other) {
                place_order(ctx, component, &state, slot).await;
            }
        }
    }
}

/// Prices the session cart against the current catalog. Entries whose item
/// has vanished or been retired are dropped from the display (checkout skips
/// them the same way).
async fn resolve_cart(
    state: &AppState,
    entries: &[CartEntry],
) -> Result<Vec<(MenuItem, i64)>, sqlx::Error> {
    let mut lines = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(item) = catalog::get_item(&state.db, entry.item_id).await? {
            if item.is_available {
                lines.push((item, entry.quantity));
            }
        }
    }
    Ok(lines)
}

async fn view_cart(ctx: &Context, component: &ComponentInteraction, state: &AppState) {
    let entries = state.sessions.cart(component.user.id.get()).await;
    match resolve_cart(state, &entries).await {
        Ok(lines) => {
            let (embed, rows) = views::cart_view(&lines);
            show(ctx, component, "cart.view", embed, rows).await;
        }
        Err(e) => show_db_error(ctx, component, "cart.view", e).await,
    }
}

async fn place_order(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
    slot: ids::PickupSlot,
) {
    let user_id = component.user.id;
    let cart = state.sessions.cart(user_id.get()).await;
    if cart.is_empty() {
        let (embed, rows) = views::cart_view(&[]);
        show(ctx, component, "cart.place.empty", embed, rows).await;
        return;
    }

    match orders::place_order(&state.db, user_id, &cart, Some(slot.label())).await {
        Ok(order_id) => {
            state.sessions.with(user_id.get(), |s| s.clear_cart()).await;
            let (embed, rows) = views::order_placed_view(order_id, slot.label());
            show(ctx, component, "cart.place", embed, rows).await;
            // The order is already committed; admin notification is best
            // effort and must not affect the confirmation above.
            notify::order_placed(ctx, state, order_id).await;
        }
        Err(e) => {
            tracing::error!(target: "cart.place", error = ?e, "order placement failed");
            let embed = style::error_embed(
                "Something went wrong",
                "We couldn't place your order. Please try again later.",
            );
            let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
                ids::NAV_HOME,
                "🔙 Main menu",
            )])];
            show(ctx, component, "cart.place.err", embed, rows).await;
        }
    }
}

//! Handles the `shop_*` button family: the item listing, the per-item
//! quantity stepper, and adding to the cart.

use super::ids;
use super::util::{defer_component, show, show_db_error};
use crate::database::catalog;
use crate::ui::buttons::Btn;
use crate::ui::{style, views};
use crate::AppState;
use serenity::builder::CreateActionRow;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, state: Arc<AppState>) {
    defer_component(ctx, component).await;
    let custom_id = component.data.custom_id.clone();

    if custom_id == ids::SHOP_OPEN {
        match catalog::list_available(&state.db).await {
            Ok(items) => {
                let (embed, rows) = views::menu_view(&items);
                show(ctx, component, "shop.open", embed, rows).await;
            }
            Err(e) => show_db_error(ctx, component, "shop.open", e).await,
        }
        return;
    }

    // Stepper buttons carry the item id and the currently shown quantity.
    let (item_id, quantity) = if let Some((id, qty)) = ids::parse_item_qty(&custom_id, ids::SHOP_ITEM_PREFIX) {
        (id, qty)
    } else if let Some((id, qty)) = ids::parse_item_qty(&custom_id, ids::SHOP_INC_PREFIX) {
        (id, qty + 1)
    } else if let Some((id, qty)) = ids::parse_item_qty(&custom_id, ids::SHOP_DEC_PREFIX) {
        (id, (qty - 1).max(1))
    } else if let Some((id, qty)) = ids::parse_item_qty(&custom_id, ids::SHOP_ADD_PREFIX) {
        add_to_cart(ctx, component, &state, id, qty).await;
        return;
    } else {
        return; // the disabled quantity label, or an unknown id
    };

    match catalog::get_item(&state.db, item_id).await {
        Ok(Some(item)) if item.is_available => {
            let (embed, rows) = views::item_view(&item, quantity);
            show(ctx, component, "shop.item", embed, rows).await;
        }
        Ok(_) => show_not_found(ctx, component).await,
        Err(e) => show_db_error(ctx, component, "shop.item", e).await,
    }
}

async fn add_to_cart(
    ctx: &Context,
    component: &ComponentInteraction,
    state: &AppState,
    item_id: i32,
    quantity: i64,
) {
    // Resolve the name first so a retired item can't slip into the cart.
    let item = match catalog::get_item(&state.db, item_id).await {
        Ok(Some(item)) if item.is_available => item,
        Ok(_) => {
            show_not_found(ctx, component).await;
            return;
        }
        Err(e) => {
            show_db_error(ctx, component, "shop.add", e).await;
            return;
        }
    };
    state
        .sessions
        .with(component.user.id.get(), |s| s.add_to_cart(item_id, quantity))
        .await;
    let (embed, rows) = views::added_to_cart_view(&item.name);
    show(ctx, component, "shop.add", embed, rows).await;
}

async fn show_not_found(ctx: &Context, component: &ComponentInteraction) {
    let embed = style::error_embed("Not found", "That item is no longer on the menu.");
    let rows = vec![CreateActionRow::Buttons(vec![Btn::secondary(
        ids::SHOP_OPEN,
        "🔙 Back to menu",
    )])];
    show(ctx, component, "shop.missing", embed, rows).await;
}

//! Handles the global `nav_*` buttons: main menu, order history, about.

use super::util::{defer_component, show, show_db_error};
use super::ids;
use crate::database::{orders, users};
use crate::ui::views;
use crate::AppState;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub async fn handle(ctx: &Context, component: &mut ComponentInteraction, state: Arc<AppState>) {
    defer_component(ctx, component).await;
    match component.data.custom_id.as_str() {
        ids::NAV_HOME => {
            let is_admin = users::is_admin(&state.db, component.user.id)
                .await
                .unwrap_or(false);
            let (embed, rows) = views::main_menu(component.user.display_name(), is_admin);
            show(ctx, component, "nav.home", embed, rows).await;
        }
        ids::NAV_ORDERS => match orders::user_orders(&state.db, component.user.id).await {
            Ok(list) => {
                let (embed, rows) = views::orders_view(&list);
                show(ctx, component, "nav.orders", embed, rows).await;
            }
            Err(e) => show_db_error(ctx, component, "nav.orders", e).await,
        },
        ids::NAV_ABOUT => {
            let (embed, rows) = views::about_view();
            show(ctx, component, "nav.about", embed, rows).await;
        }
        _ => {}
    }
}

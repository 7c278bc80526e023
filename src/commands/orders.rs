//! `/orders` — the caller's order history.

use crate::database::orders;
use crate::ui::{style, views};
use crate::AppState;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub fn register() -> CreateCommand {
    CreateCommand::new("orders").description("Show your orders")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: Arc<AppState>) {
    match orders::user_orders(&state.db, interaction.user.id).await {
        Ok(list) => {
            let (embed, rows) = views::orders_view(&list);
            super::respond(ctx, interaction, embed, rows).await;
        }
        Err(e) => {
            tracing::error!(target: "commands.orders", error = ?e, "user_orders failed");
            let embed = style::error_embed("Something went wrong", "Please try again later.");
            super::respond(ctx, interaction, embed, vec![]).await;
        }
    }
}

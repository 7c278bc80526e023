//! `/menu` — the drink listing.

use crate::database::catalog;
use crate::ui::{style, views};
use crate::AppState;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub fn register() -> CreateCommand {
    CreateCommand::new("menu").description("Show the menu")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: Arc<AppState>) {
    match catalog::list_available(&state.db).await {
        Ok(items) => {
            let (embed, rows) = views::menu_view(&items);
            super::respond(ctx, interaction, embed, rows).await;
        }
        Err(e) => {
            tracing::error!(target: "commands.menu", error = ?e, "list_available failed");
            let embed = style::error_embed("Something went wrong", "Please try again later.");
            super::respond(ctx, interaction, embed, vec![]).await;
        }
    }
}

//! `/start` — onboarding: ensures the user row exists and shows the main menu.

use crate::database::users;
use crate::ui::{style, views};
use crate::AppState;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;
use std::sync::Arc;

pub fn register() -> CreateCommand {
    CreateCommand::new("start").description("Start ordering from the coffee shop")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: Arc<AppState>) {
    let user = &interaction.user;
    if let Err(e) = users::ensure_user(&state.db, user.id, Some(&user.name)).await {
        tracing::error!(target: "commands.start", error = ?e, "ensure_user failed");
        let embed = style::error_embed("Something went wrong", "Please try again later.");
        super::respond(ctx, interaction, embed, vec![]).await;
        return;
    }
    let is_admin = users::is_admin(&state.db, user.id).await.unwrap_or(false);
    let (embed, rows) = views::main_menu(user.display_name(), is_admin);
    super::respond(ctx, interaction, embed, rows).await;
}

//! `/about` — static shop information.

use crate::ui::views;
use serenity::builder::CreateCommand;
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

pub fn register() -> CreateCommand {
    CreateCommand::new("about").description("About the coffee shop")
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction) {
    let (embed, rows) = views::about_view();
    super::respond(ctx, interaction, embed, rows).await;
}

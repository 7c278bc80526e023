// Declares the slash command modules and a shared response helper.

pub mod about;
pub mod menu;
pub mod orders;
pub mod start;

use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateInteractionResponse, CreateInteractionResponseMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::prelude::Context;

/// Sends a command response as an embed plus button rows, logging failures.
pub(crate) async fn respond(
    ctx: &Context,
    interaction: &CommandInteraction,
    embed: CreateEmbed,
    components: Vec<CreateActionRow>,
) {
    let message = CreateInteractionResponseMessage::new()
        .embed(embed)
        .components(components);
    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await
    {
        tracing::error!(target: "commands", command = %interaction.data.name, error = ?e, "failed to respond");
    }
}

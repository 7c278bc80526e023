//! Gateway event handler: routes slash commands, button presses, and the
//! plain messages consumed by armed text-input flows.

use crate::interactions::{
    admin_handler, cart_handler, catalog_handler, nav_handler, roster_handler, shop_handler,
};
use crate::session::PendingInput;
use crate::{commands, AppState};
use serenity::async_trait;
use serenity::model::application::Interaction;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::GuildId;
use serenity::prelude::{Context, EventHandler};

pub struct Handler {
    /// Commands are registered on, and messages accepted from, this guild only.
    pub allowed_guild_id: GuildId,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        match interaction {
            Interaction::Command(command) => {
                tracing::info!(target: "gateway", command = %command.data.name, user = command.user.id.get(), "slash command");
                let Some(state) = AppState::from_ctx(&ctx).await else {
                    return;
                };
                match command.data.name.as_str() {
                    "start" => commands::start::run_slash(&ctx, &command, state).await,
                    "menu" => commands::menu::run_slash(&ctx, &command, state).await,
                    "orders" => commands::orders::run_slash(&ctx, &command, state).await,
                    "about" => commands::about::run_slash(&ctx, &command).await,
                    other => {
                        tracing::warn!(target: "gateway", command = %other, "unknown slash command");
                    }
                }
            }
            Interaction::Component(mut component) => {
                let Some(state) = AppState::from_ctx(&ctx).await else {
                    return;
                };
                state.sessions.prune_idle().await;
                // The segment before the first underscore picks the handler family.
                let family = component
                    .data
                    .custom_id
                    .split('_')
                    .next()
                    .unwrap_or_default()
                    .to_string();
                tracing::debug!(target: "gateway", cid = %component.data.custom_id, user = component.user.id.get(), "component");
                match family.as_str() {
                    "nav" => nav_handler::handle(&ctx, &mut component, state).await,
                    "shop" => shop_handler::handle(&ctx, &mut component, state).await,
                    "cart" => cart_handler::handle(&ctx, &mut component, state).await,
                    "admin" => admin_handler::handle(&ctx, &mut component, state).await,
                    "catalog" => catalog_handler::handle(&ctx, &mut component, state).await,
                    "roster" => roster_handler::handle(&ctx, &mut component, state).await,
                    other => {
                        tracing::warn!(target: "gateway", family = %other, cid = %component.data.custom_id, "unrouted component");
                    }
                }
            }
            _ => {}
        }
    }

    /// Plain messages matter only when the author has a text-input step armed
    /// (catalog add, roster add). Everything else is ignored.
    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        if msg.guild_id.is_some_and(|g| g != self.allowed_guild_id) {
            return;
        }
        let Some(state) = AppState::from_ctx(&ctx).await else {
            return;
        };
        state.sessions.prune_idle().await;
        match state.sessions.pending(msg.author.id.get()).await {
            PendingInput::Idle => {}
            pending @ (PendingInput::AwaitingItemName | PendingInput::AwaitingItemPrice { .. }) => {
                catalog_handler::handle_text(&ctx, &msg, &state, pending).await;
            }
            PendingInput::AwaitingAdminTarget => {
                roster_handler::handle_text(&ctx, &msg, &state).await;
            }
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!(target: "gateway", bot = %ready.user.name, "connected");
        let registered = self
            .allowed_guild_id
            .set_commands(
                &ctx.http,
                vec![
                    commands::start::register(),
                    commands::menu::register(),
                    commands::orders::register(),
                    commands::about::register(),
                ],
            )
            .await;
        match registered {
            Ok(cmds) => {
                tracing::info!(target: "gateway", count = cmds.len(), guild = self.allowed_guild_id.get(), "guild commands registered");
            }
            Err(e) => {
                tracing::error!(target: "gateway", error = ?e, "command registration failed");
            }
        }
    }
}

use dotenv::dotenv;
use espresso_bot::config::Config;
use espresso_bot::database::init;
use espresso_bot::handler::Handler;
use espresso_bot::AppState;
use serenity::model::id::GuildId;
use serenity::prelude::*;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env();

    let pool = init::connect(&config.db)
        .await
        .expect("Failed to connect to the database.");
    init::create_tables(&pool, &config.db.schema)
        .await
        .expect("Failed to initialize the database schema.");
    tracing::info!(target: "startup", schema = %config.db.schema, "database ready");

    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;
    let handler = Handler {
        allowed_guild_id: GuildId::new(config.guild_id),
    };
    let mut client = Client::builder(&config.token, intents)
        .event_handler(handler)
        .await
        .expect("Error creating the Discord client.");
    {
        let mut data = client.data.write().await;
        data.insert::<AppState>(Arc::new(AppState::new(pool)));
    }

    if let Err(e) = client.start().await {
        tracing::error!(target: "startup", error = ?e, "client terminated");
    }
}

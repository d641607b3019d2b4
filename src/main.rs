use std::sync::Arc;

use catalog_courier_bot::config::Config;
use catalog_courier_bot::handler::Handler;
use catalog_courier_bot::{AppState, liveness, logging};
use serenity::model::gateway::GatewayIntents;
use serenity::prelude::*;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    logging::init(None);

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    let port = config.port;
    let token = config.discord_token.clone();
    let state = Arc::new(AppState::new(config).expect("Failed to build the HTTP client."));

    // Prefix commands need message content; slash commands arrive with GUILDS.
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::DIRECT_MESSAGES
        | GatewayIntents::MESSAGE_CONTENT;

    let mut client = Client::builder(&token, intents)
        .event_handler(Handler { state })
        .await
        .expect("Error creating the Discord client.");

    // The bot and the liveness route only share process lifetime; whichever stops first ends it.
    tokio::select! {
        result = client.start() => {
            if let Err(why) = result {
                error!(target = "main", error = ?why, "client error");
            }
        }
        result = liveness::serve(port) => {
            if let Err(why) = result {
                error!(target = "main", error = %why, "liveness server error");
            }
        }
    }
    info!(target = "main", "shutting down");
}

use super::target::{PrefixTarget, SlashTarget};
use super::ui::{downloading_text, usage_text};
use crate::AppState;
use crate::catalog::Identifier;
use crate::delivery::DeliveryTarget;
use crate::services::get::get_archive;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::{error, instrument, warn};

pub fn register() -> CreateCommand {
    CreateCommand::new("get")
        .description("Download the archive for a Steam app id")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "appid", "Steam app id (digits)")
                .required(true),
        )
}

async fn finish(state: &AppState, id: &Identifier, target: &dyn DeliveryTarget) {
    if let Err(e) = get_archive(state, id, target).await {
        warn!(target = "get", appid = %id, error = %e, "get failed");
        target.fail(&e).await;
    }
}

#[instrument(level = "debug", skip_all, fields(user_id = interaction.user.id.get()))]
pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let raw = interaction
        .data
        .options
        .first()
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default();
    let id = match Identifier::parse(raw) {
        Ok(id) => id,
        Err(_) => {
            let reply = CreateInteractionResponseMessage::new()
                .content(usage_text("/"))
                .ephemeral(true);
            interaction
                .create_response(&ctx.http, CreateInteractionResponse::Message(reply))
                .await
                .ok();
            return;
        }
    };

    let pending = CreateInteractionResponseMessage::new().content(downloading_text(&id));
    if let Err(e) = interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(pending))
        .await
    {
        error!(target = "get", appid = %id, error = ?e, "could not acknowledge /get");
        return;
    }
    let target = SlashTarget::new(ctx, interaction, &state.config.endpoints);
    finish(state, &id, &target).await;
}

#[instrument(level = "debug", skip_all, fields(user_id = msg.author.id.get()))]
pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>, state: &AppState) {
    let id = match args.first().map(|raw| Identifier::parse(raw)) {
        Some(Ok(id)) => id,
        _ => {
            msg.reply(&ctx.http, usage_text(&state.config.prefix))
                .await
                .ok();
            return;
        }
    };

    let pending = CreateMessage::new()
        .content(downloading_text(&id))
        .reference_message(msg);
    let status = match msg.channel_id.send_message(&ctx.http, pending).await {
        Ok(status) => status,
        Err(e) => {
            error!(target = "get", appid = %id, error = ?e, "could not post status message");
            return;
        }
    };
    let target = PrefixTarget::new(ctx, msg, status, &state.config.endpoints);
    finish(state, &id, &target).await;
}

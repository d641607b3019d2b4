use super::ui::{SearchView, normalize_query, searching_text, usage_text};
use crate::AppState;
use serenity::builder::{
    CreateCommand, CreateCommandOption, CreateInteractionResponse,
    CreateInteractionResponseMessage, CreateMessage, EditInteractionResponse, EditMessage,
};
use serenity::model::application::{CommandInteraction, CommandOptionType};
use serenity::model::channel::Message;
use serenity::prelude::*;
use tracing::{instrument, warn};

pub fn register() -> CreateCommand {
    CreateCommand::new("search")
        .description("Search the game catalog by name")
        .add_option(
            CreateCommandOption::new(CommandOptionType::String, "query", "Game name to search for")
                .required(true),
        )
}

/// Run the catalog search for both invocation styles.
async fn search_view(state: &AppState, query: &str) -> SearchView {
    let result = state.catalog.search(query).await;
    if let Err(e) = &result {
        warn!(target = "search", query, error = %e, "search failed");
    }
    SearchView::new(query, &result)
}

#[instrument(level = "debug", skip_all, fields(user_id = interaction.user.id.get()))]
pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let raw = interaction
        .data
        .options
        .first()
        .and_then(|opt| opt.value.as_str())
        .unwrap_or_default();
    let Some(query) = normalize_query(raw) else {
        let usage = CreateInteractionResponseMessage::new()
            .content(usage_text("/"))
            .ephemeral(true);
        interaction
            .create_response(&ctx.http, CreateInteractionResponse::Message(usage))
            .await
            .ok();
        return;
    };
    let pending = CreateInteractionResponseMessage::new().content(searching_text(&query));
    if interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(pending))
        .await
        .is_err()
    {
        return;
    }

    let builder = EditInteractionResponse::from(search_view(state, &query).await);
    if let Err(e) = interaction.edit_response(&ctx.http, builder).await {
        tracing::error!(target = "search", error = ?e, "edit_response failed");
    }
}

#[instrument(level = "debug", skip_all, fields(user_id = msg.author.id.get()))]
pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>, state: &AppState) {
    let Some(query) = normalize_query(&args.join(" ")) else {
        msg.reply(&ctx.http, usage_text(&state.config.prefix))
            .await
            .ok();
        return;
    };
    let pending = CreateMessage::new()
        .content(searching_text(&query))
        .reference_message(msg);
    let Ok(mut status) = msg.channel_id.send_message(&ctx.http, pending).await else {
        return;
    };
    let builder = EditMessage::from(search_view(state, &query).await);
    if let Err(e) = status.edit(ctx, builder).await {
        tracing::error!(target = "search", error = ?e, "status edit failed");
    }
}

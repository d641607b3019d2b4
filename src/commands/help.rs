//! Interactive help: a command list with a dropdown for per-command details.
use crate::AppState;
use crate::interactions::ids::HELP_SELECT;
use crate::interactions::util::{defer_component, edit_component, selected_value};
use crate::ui::style::COLOR_HELP;
use serenity::builder::{
    CreateActionRow, CreateCommand, CreateCommandOption, CreateEmbed, CreateEmbedFooter,
    CreateInteractionResponse, CreateInteractionResponseMessage, CreateMessage, CreateSelectMenu,
    CreateSelectMenuKind, CreateSelectMenuOption, EditInteractionResponse,
};
use serenity::model::application::{CommandInteraction, CommandOptionType, ComponentInteraction};
use serenity::model::channel::Message;
use serenity::prelude::*;

struct CommandInfo {
    name: &'static str,
    emoji: char,
    description: &'static str,
    usage: &'static [&'static str],
    details: &'static str,
}

const COMMANDS: &[CommandInfo] = &[
    CommandInfo {
        name: "search",
        emoji: '🔍',
        description: "Search the game catalog by name.",
        usage: &["search <name>", "s <name>"],
        details: "Lists up to 25 matching games. Pick one from the dropdown to see its app id, developer, release date and price.",
    },
    CommandInfo {
        name: "get",
        emoji: '📦',
        description: "Download the archive for an app id.",
        usage: &["get <appid>", "g <appid>"],
        details: "Tries the primary DB first, then the mirror. Archives up to 8 MB are attached directly; larger ones are uploaded to a file host and linked.",
    },
    CommandInfo {
        name: "help",
        emoji: '❔',
        description: "Shows this help menu.",
        usage: &["help", "h", "help <command>"],
        details: "Displays all commands or details about a specific one.",
    },
];

/// All documented command names (used by tests to check coverage).
pub fn all_command_names() -> Vec<&'static str> {
    COMMANDS.iter().map(|c| c.name).collect()
}

pub fn register() -> CreateCommand {
    CreateCommand::new("help")
        .description("Shows information about commands")
        .add_option(
            CreateCommandOption::new(
                CommandOptionType::String,
                "command",
                "The command you want help with",
            )
            .required(false),
        )
}

fn create_command_select_menu() -> CreateActionRow {
    let options = COMMANDS
        .iter()
        .map(|cmd| {
            CreateSelectMenuOption::new(cmd.name, cmd.name)
                .description(cmd.description)
                .emoji(cmd.emoji)
        })
        .collect();
    let select_menu = CreateSelectMenu::new(HELP_SELECT, CreateSelectMenuKind::String { options })
        .placeholder("Select a command for more details...");
    CreateActionRow::SelectMenu(select_menu)
}

fn create_help_embed(prefix: &str, command_name: Option<&str>) -> CreateEmbed {
    let embed = CreateEmbed::new()
        .footer(CreateEmbedFooter::new(format!("Current Prefix: {prefix}")))
        .color(COLOR_HELP);
    match command_name {
        Some(name) => match COMMANDS.iter().find(|c| c.name == name) {
            Some(cmd) => {
                let usage = cmd
                    .usage
                    .iter()
                    .map(|u| format!("`{prefix}{u}`"))
                    .collect::<Vec<_>>()
                    .join("\n");
                embed
                    .title(format!("{} Command: {}", cmd.emoji, cmd.name))
                    .field("Description", cmd.description, false)
                    .field("Usage", usage, false)
                    .field("Details", cmd.details, false)
            }
            None => embed
                .title("Command Not Found")
                .description(format!("Sorry, I don't know a command called `{name}`."))
                .color(0xFF0000),
        },
        None => {
            let list = COMMANDS
                .iter()
                .map(|c| format!("{} `{}` - {}", c.emoji, c.name, c.description))
                .collect::<Vec<_>>()
                .join("\n");
            embed
                .title("Help Menu")
                .description(format!(
                    "Slash commands work too (`/search`, `/get`). For details use `{prefix}help <command>` or the dropdown below."
                ))
                .field("Commands", list, false)
        }
    }
}

pub async fn run_slash(ctx: &Context, interaction: &CommandInteraction, state: &AppState) {
    let command_name = interaction
        .data
        .options
        .first()
        .and_then(|opt| opt.value.as_str());
    let embed = create_help_embed(&state.config.prefix, command_name);
    let mut builder = CreateInteractionResponseMessage::new().embed(embed);
    if command_name.is_none() {
        builder = builder.components(vec![create_command_select_menu()]);
    }
    interaction
        .create_response(&ctx.http, CreateInteractionResponse::Message(builder))
        .await
        .ok();
}

pub async fn handle_interaction(ctx: &Context, component: &ComponentInteraction, state: &AppState) {
    let Some(selected) = selected_value(component) else {
        return;
    };
    let embed = create_help_embed(&state.config.prefix, Some(selected));
    defer_component(ctx, component).await;
    let builder = EditInteractionResponse::new()
        .embed(embed)
        .components(vec![]);
    edit_component(ctx, component, "help_detail", builder).await;
}

pub async fn run_prefix(ctx: &Context, msg: &Message, args: Vec<&str>, state: &AppState) {
    let command_name = args.first().copied();
    let embed = create_help_embed(&state.config.prefix, command_name);
    let mut builder = CreateMessage::new().embed(embed).reference_message(msg);
    if command_name.is_none() {
        builder = builder.components(vec![create_command_select_menu()]);
    }
    msg.channel_id.send_message(&ctx.http, builder).await.ok();
}

use crate::interactions::ids::family;
use crate::{AppState, commands, interactions};
use serenity::async_trait;
use serenity::client::Context;
use serenity::model::application::{Command as GlobalCommand, Interaction};
use serenity::model::{channel::Message, gateway::Ready, id::GuildId};
use serenity::prelude::EventHandler;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{error, info};

/// Prefix commands and their aliases.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Search,
    Get,
    Help,
    Unknown,
}

impl FromStr for Command {
    type Err = ();
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "search" | "s" => Ok(Command::Search),
            "get" | "g" => Ok(Command::Get),
            "help" | "h" => Ok(Command::Help),
            _ => Ok(Command::Unknown),
        }
    }
}

pub struct Handler {
    pub state: Arc<AppState>,
}

#[async_trait]
impl EventHandler for Handler {
    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let state = self.state.as_ref();
        if let Interaction::Command(command) = &interaction {
            match command.data.name.as_str() {
                "search" => commands::search::run::run_slash(&ctx, command, state).await,
                "get" => commands::get::run::run_slash(&ctx, command, state).await,
                "help" => commands::help::run_slash(&ctx, command, state).await,
                _ => {}
            }
        } else if let Interaction::Component(component) = &interaction {
            match family(&component.data.custom_id) {
                "search" => interactions::search_handler::handle(&ctx, component, state).await,
                "help" => commands::help::handle_interaction(&ctx, component, state).await,
                _ => {}
            }
        }
    }

    async fn message(&self, ctx: Context, msg: Message) {
        if msg.author.bot {
            return;
        }
        let state = self.state.as_ref();
        let Some(command_body) = msg.content.strip_prefix(state.config.prefix.as_str()) else {
            return;
        };
        let mut args = command_body.split_whitespace();
        let Some(command_str) = args.next() else {
            return;
        };
        let command = Command::from_str(command_str).unwrap_or(Command::Unknown);
        let args_vec: Vec<&str> = args.collect();
        match command {
            Command::Search => commands::search::run::run_prefix(&ctx, &msg, args_vec, state).await,
            Command::Get => commands::get::run::run_prefix(&ctx, &msg, args_vec, state).await,
            Command::Help => commands::help::run_prefix(&ctx, &msg, args_vec, state).await,
            Command::Unknown => {}
        }
    }

    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(target = "handler", user = %ready.user.name, "connected and ready");
        let commands_to_register = vec![
            commands::search::run::register(),
            commands::get::run::register(),
            commands::help::register(),
        ];
        let result = match self.state.config.server_id {
            Some(id) => GuildId::new(id)
                .set_commands(&ctx.http, commands_to_register)
                .await
                .map(|_| ()),
            None => GlobalCommand::set_global_commands(&ctx.http, commands_to_register)
                .await
                .map(|_| ()),
        };
        match result {
            Ok(()) => info!(target = "handler", "slash commands registered"),
            Err(e) => error!(target = "handler", error = ?e, "error registering slash commands"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefix_aliases() {
        assert_eq!(Command::from_str("search"), Ok(Command::Search));
        assert_eq!(Command::from_str("s"), Ok(Command::Search));
        assert_eq!(Command::from_str("g"), Ok(Command::Get));
        assert_eq!(Command::from_str("h"), Ok(Command::Help));
        assert_eq!(Command::from_str("ping"), Ok(Command::Unknown));
    }
}

//! Discord-backed delivery targets for slash and prefix invocations.
use super::ui::{archive_embed, failure_embed};
use crate::archive::StagedArchive;
use crate::config::Endpoints;
use crate::delivery::{ArchiveCard, DeliveryTarget};
use crate::error::GetError;
use async_trait::async_trait;
use serenity::builder::{
    CreateAttachment, CreateInteractionResponseFollowup, CreateMessage, EditInteractionResponse,
    EditMessage,
};
use serenity::model::application::CommandInteraction;
use serenity::model::channel::Message;
use serenity::prelude::*;
use tokio::sync::Mutex;

fn chat_error(e: serenity::Error) -> GetError {
    GetError::Chat(e.to_string())
}

async fn load_attachment(archive: &StagedArchive) -> Result<CreateAttachment, GetError> {
    let file = tokio::fs::File::open(archive.path()).await?;
    CreateAttachment::file(&file, archive.attachment_name())
        .await
        .map_err(chat_error)
}

/// Reports through the original interaction response of a `/get` command.
pub struct SlashTarget<'a> {
    ctx: &'a Context,
    interaction: &'a CommandInteraction,
    endpoints: &'a Endpoints,
}

impl<'a> SlashTarget<'a> {
    pub fn new(
        ctx: &'a Context,
        interaction: &'a CommandInteraction,
        endpoints: &'a Endpoints,
    ) -> Self {
        Self {
            ctx,
            interaction,
            endpoints,
        }
    }
}

#[async_trait]
impl<'a> DeliveryTarget for SlashTarget<'a> {
    async fn progress(&self, text: &str) {
        let builder = EditInteractionResponse::new().content(text);
        if let Err(e) = self.interaction.edit_response(&self.ctx.http, builder).await {
            tracing::debug!(target = "get.progress", error = ?e, "progress edit failed");
        }
    }

    async fn attach(&self, card: &ArchiveCard, archive: &StagedArchive) -> Result<(), GetError> {
        let attachment = load_attachment(archive).await?;
        let followup = CreateInteractionResponseFollowup::new()
            .embed(archive_embed(card, self.endpoints))
            .add_file(attachment);
        self.interaction
            .create_followup(&self.ctx.http, followup)
            .await
            .map_err(chat_error)?;
        // The status message has served its purpose once the file is posted.
        self.interaction.delete_response(&self.ctx.http).await.ok();
        Ok(())
    }

    async fn link(&self, card: &ArchiveCard) -> Result<(), GetError> {
        let builder = EditInteractionResponse::new()
            .content("")
            .embed(archive_embed(card, self.endpoints));
        self.interaction
            .edit_response(&self.ctx.http, builder)
            .await
            .map(|_| ())
            .map_err(chat_error)
    }

    async fn fail(&self, error: &GetError) {
        let builder = EditInteractionResponse::new()
            .content("")
            .embed(failure_embed(error));
        if let Err(e) = self.interaction.edit_response(&self.ctx.http, builder).await {
            tracing::error!(target = "get.fail", error = ?e, "could not report failure");
        }
    }
}

/// Reports through a status message posted in reply to a prefix command.
pub struct PrefixTarget<'a> {
    ctx: &'a Context,
    invocation: &'a Message,
    status: Mutex<Message>,
    endpoints: &'a Endpoints,
}

impl<'a> PrefixTarget<'a> {
    pub fn new(
        ctx: &'a Context,
        invocation: &'a Message,
        status: Message,
        endpoints: &'a Endpoints,
    ) -> Self {
        Self {
            ctx,
            invocation,
            status: Mutex::new(status),
            endpoints,
        }
    }

    async fn edit_status(&self, builder: EditMessage) -> Result<(), GetError> {
        let mut status = self.status.lock().await;
        status.edit(self.ctx, builder).await.map_err(chat_error)
    }
}

#[async_trait]
impl<'a> DeliveryTarget for PrefixTarget<'a> {
    async fn progress(&self, text: &str) {
        if let Err(e) = self.edit_status(EditMessage::new().content(text)).await {
            tracing::debug!(target = "get.progress", error = %e, "progress edit failed");
        }
    }

    async fn attach(&self, card: &ArchiveCard, archive: &StagedArchive) -> Result<(), GetError> {
        let attachment = load_attachment(archive).await?;
        let message = CreateMessage::new()
            .embed(archive_embed(card, self.endpoints))
            .add_file(attachment)
            .reference_message(self.invocation);
        self.invocation
            .channel_id
            .send_message(&self.ctx.http, message)
            .await
            .map_err(chat_error)?;
        self.status.lock().await.delete(self.ctx).await.ok();
        Ok(())
    }

    async fn link(&self, card: &ArchiveCard) -> Result<(), GetError> {
        self.edit_status(
            EditMessage::new()
                .content("")
                .embed(archive_embed(card, self.endpoints)),
        )
        .await
    }

    async fn fail(&self, error: &GetError) {
        let builder = EditMessage::new().content("").embed(failure_embed(error));
        if let Err(e) = self.edit_status(builder).await {
            tracing::error!(target = "get.fail", error = %e, "could not report failure");
        }
    }
}

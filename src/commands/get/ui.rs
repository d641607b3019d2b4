use crate::catalog::Identifier;
use crate::config::Endpoints;
use crate::delivery::ArchiveCard;
use crate::error::GetError;
use crate::ui::style::{COLOR_CATALOG, EMOJI_PENDING, code, error_embed, size_label};
use serenity::builder::{CreateEmbed, CreateEmbedFooter};

pub fn downloading_text(id: &Identifier) -> String {
    format!("Downloading {}... {EMOJI_PENDING}", code(id.as_str()))
}

pub fn usage_text(prefix: &str) -> String {
    format!("Usage: `{prefix}get <appid>` (digits only)")
}

/// Final card for a delivered archive. Uploads additionally carry the link and a footer.
pub fn archive_embed(card: &ArchiveCard, endpoints: &Endpoints) -> CreateEmbed {
    let mut embed = CreateEmbed::new()
        .title(&card.name)
        .color(COLOR_CATALOG)
        .field("AppID", code(&card.appid), true)
        .field("ZIP size", size_label(card.size_mib()), true)
        .field("Source", card.source.description(), false)
        .thumbnail(endpoints.header_image_for(&card.appid));
    if let Some(link) = &card.link {
        embed = embed
            .field("Download link", link, false)
            .footer(CreateEmbedFooter::new(format!(
                "DB: {} • file host used (>8MB)",
                card.source.description()
            )));
    }
    embed
}

pub fn failure_embed(error: &GetError) -> CreateEmbed {
    let title = match error {
        GetError::NotFound(_) => "Not found",
        GetError::Upload(_) => "Upload failed",
        _ => "Download failed",
    };
    error_embed(title, error.user_message())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn downloading_text_quotes_the_id() {
        let id = Identifier::parse("440").unwrap();
        assert_eq!(downloading_text(&id), "Downloading `440`... ⏳");
    }

    #[test]
    fn usage_text_uses_prefix() {
        assert_eq!(usage_text("!"), "Usage: `!get <appid>` (digits only)");
    }
}

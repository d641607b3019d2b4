use crate::catalog::{CatalogEntry, SearchHit, display_name};
use crate::config::Endpoints;
use crate::error::CatalogError;
use crate::interactions::ids::SEARCH_SELECT;
use crate::ui::style::{COLOR_CATALOG, EMOJI_FAIL, EMOJI_SEARCH, code, error_embed};
use serenity::builder::{
    CreateActionRow, CreateEmbed, CreateEmbedFooter, CreateSelectMenu, CreateSelectMenuKind,
    CreateSelectMenuOption, EditInteractionResponse, EditMessage,
};

/// Trimmed query, or `None` when there is nothing to search for.
pub fn normalize_query(raw: &str) -> Option<String> {
    let query = raw.trim();
    (!query.is_empty()).then(|| query.to_string())
}

pub fn usage_text(prefix: &str) -> String {
    format!("Usage: `{prefix}search <name>`")
}

pub fn searching_text(query: &str) -> String {
    format!("Searching for **{query}**... {EMOJI_SEARCH}")
}

pub fn no_results_text(query: &str) -> String {
    format!("No results for **{query}** {EMOJI_FAIL}")
}

/// Numbered select-menu label, kept within Discord's 100 character cap.
pub fn option_label(index: usize, hit: &SearchHit) -> String {
    display_name(&format!("{}. {}", index + 1, hit.name))
}

pub fn results_view(query: &str, hits: &[SearchHit]) -> (CreateEmbed, Vec<CreateActionRow>) {
    let embed = CreateEmbed::new()
        .title(format!("Results for: {query}"))
        .description("Pick a game from the menu below 👇")
        .color(COLOR_CATALOG);
    let options = hits
        .iter()
        .enumerate()
        .map(|(i, hit)| CreateSelectMenuOption::new(option_label(i, hit), hit.appid.clone()))
        .collect();
    let menu = CreateSelectMenu::new(SEARCH_SELECT, CreateSelectMenuKind::String { options })
        .placeholder("Select a game");
    (embed, vec![CreateActionRow::SelectMenu(menu)])
}

/// What replaces the "Searching" status once the catalog answers.
pub struct SearchView {
    pub content: String,
    pub embed: Option<CreateEmbed>,
    pub components: Vec<CreateActionRow>,
}

impl SearchView {
    pub fn new(query: &str, result: &Result<Vec<SearchHit>, CatalogError>) -> Self {
        match result {
            Ok(hits) if hits.is_empty() => Self {
                content: no_results_text(query),
                embed: None,
                components: Vec::new(),
            },
            Ok(hits) => {
                let (embed, components) = results_view(query, hits);
                Self {
                    content: String::new(),
                    embed: Some(embed),
                    components,
                }
            }
            Err(e) => Self {
                content: String::new(),
                embed: Some(error_embed("Search failed", e.to_string())),
                components: Vec::new(),
            },
        }
    }
}

impl From<SearchView> for EditMessage {
    fn from(view: SearchView) -> Self {
        let builder = EditMessage::new()
            .content(view.content)
            .components(view.components);
        match view.embed {
            Some(embed) => builder.embed(embed),
            None => builder,
        }
    }
}

impl From<SearchView> for EditInteractionResponse {
    fn from(view: SearchView) -> Self {
        let builder = EditInteractionResponse::new()
            .content(view.content)
            .components(view.components);
        match view.embed {
            Some(embed) => builder.embed(embed),
            None => builder,
        }
    }
}

pub fn detail_embed(entry: &CatalogEntry, endpoints: &Endpoints) -> CreateEmbed {
    let developers = if entry.developers.is_empty() {
        "N/A".to_string()
    } else {
        entry.developers.join(", ")
    };
    CreateEmbed::new()
        .title(&entry.display_name)
        .color(COLOR_CATALOG)
        .field("Name", &entry.display_name, false)
        .field("AppID", code(&entry.appid), true)
        .field("Developer", developers, true)
        .field("Released", entry.release_date.as_deref().unwrap_or("N/A"), true)
        .field("Price", entry.price.as_deref().unwrap_or("Free"), true)
        .image(endpoints.header_image_for(&entry.appid))
        .footer(CreateEmbedFooter::new("Use /get <appid> to download"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_label_stays_under_cap() {
        let hit = SearchHit {
            appid: "1".into(),
            name: "x".repeat(100),
        };
        let label = option_label(24, &hit);
        assert!(label.starts_with("25. "));
        assert_eq!(label.chars().count(), 100);
    }

    #[test]
    fn short_labels_are_numbered() {
        let hit = SearchHit {
            appid: "440".into(),
            name: "Team Fortress 2".into(),
        };
        assert_eq!(option_label(0, &hit), "1. Team Fortress 2");
    }

    #[test]
    fn blank_queries_are_rejected() {
        assert_eq!(normalize_query("   "), None);
        assert_eq!(normalize_query("\t\n"), None);
        assert_eq!(normalize_query(""), None);
        assert_eq!(normalize_query("  portal 2 "), Some("portal 2".to_string()));
        assert_eq!(usage_text("/"), "Usage: `/search <name>`");
    }

    #[test]
    fn empty_results_show_text_only() {
        let view = SearchView::new("zzz", &Ok(Vec::new()));
        assert_eq!(view.content, no_results_text("zzz"));
        assert!(view.embed.is_none());
        assert!(view.components.is_empty());
    }

    #[test]
    fn hits_show_a_menu_and_clear_the_status_text() {
        let hits = vec![SearchHit {
            appid: "620".into(),
            name: "Portal 2".into(),
        }];
        let view = SearchView::new("portal", &Ok(hits));
        assert!(view.content.is_empty());
        assert!(view.embed.is_some());
        assert_eq!(view.components.len(), 1);
    }

    #[test]
    fn failures_show_an_error_card_without_a_menu() {
        let view = SearchView::new("portal", &Err(CatalogError::Status(503)));
        assert!(view.content.is_empty());
        assert!(view.embed.is_some());
        assert!(view.components.is_empty());
    }
}

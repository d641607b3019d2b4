//! Handles the search result select menu: swaps the result list for a detail card.
use super::ids::SEARCH_SELECT;
use super::util::{defer_component, edit_component, selected_value};
use crate::AppState;
use crate::catalog::Identifier;
use crate::commands::search::ui::detail_embed;
use serenity::builder::EditInteractionResponse;
use serenity::model::application::ComponentInteraction;
use serenity::prelude::Context;

#[tracing::instrument(level="debug", skip(ctx, component, state), fields(user_id = component.user.id.get()))]
pub async fn handle(ctx: &Context, component: &ComponentInteraction, state: &AppState) {
    if component.data.custom_id != SEARCH_SELECT {
        return;
    }
    let Some(id) = selected_value(component).and_then(|v| Identifier::parse(v).ok()) else {
        return;
    };
    defer_component(ctx, component).await;
    let entry = state.catalog.lookup(&id).await;
    let builder = EditInteractionResponse::new()
        .content("")
        .embed(detail_embed(&entry, &state.config.endpoints))
        .components(vec![]);
    edit_component(ctx, component, "search_detail", builder).await;
}

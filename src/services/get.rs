//! The `get` workflow: fetch with fallback, decorate with catalog metadata, deliver.
use crate::AppState;
use crate::archive::Source;
use crate::catalog::Identifier;
use crate::delivery::{self, DeliveryOutcome, DeliveryTarget};
use crate::error::GetError;
use tracing::{info, instrument};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivered {
    pub outcome: DeliveryOutcome,
    pub source: Source,
}

/// Run one `get` invocation end to end. Every failure is terminal and returned as-is;
/// metadata problems never are (they degrade to a placeholder name).
#[instrument(level = "debug", skip(state, target), fields(appid = %id))]
pub async fn get_archive(
    state: &AppState,
    id: &Identifier,
    target: &dyn DeliveryTarget,
) -> Result<Delivered, GetError> {
    let fetched = state.fetcher.fetch_id(id).await?;
    let source = fetched.source;
    let entry = state.catalog.lookup(id).await;
    let outcome = delivery::deliver(fetched, &entry, &state.file_host, target).await?;
    info!(target = "get", appid = %id, source = %source, outcome = ?outcome, "get finished");
    Ok(Delivered { outcome, source })
}

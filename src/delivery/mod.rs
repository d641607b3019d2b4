//! Size-gated delivery: attach inline under the platform ceiling, otherwise upload and link.
//!
//! The chat side is abstracted behind [`DeliveryTarget`] so slash commands, prefix commands
//! and tests share one code path.
pub mod file_host;

pub use file_host::FileHost;

use crate::archive::{FetchResult, Source, StagedArchive};
use crate::catalog::CatalogEntry;
use crate::constants::{BYTES_PER_MIB, MAX_INLINE_BYTES};
use crate::error::GetError;
use async_trait::async_trait;
use tracing::{info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    AttachedInline,
    UploadedLink(String),
}

/// Everything the final response card shows.
#[derive(Debug, Clone)]
pub struct ArchiveCard {
    pub appid: String,
    pub name: String,
    pub size_bytes: u64,
    pub source: Source,
    pub link: Option<String>,
}

impl ArchiveCard {
    pub fn size_mib(&self) -> f64 {
        self.size_bytes as f64 / BYTES_PER_MIB
    }
}

/// Where a `get` invocation reports progress and its result.
#[async_trait]
pub trait DeliveryTarget: Send + Sync {
    /// Replace the pending status text. Failures are logged, not propagated.
    async fn progress(&self, text: &str);
    async fn attach(&self, card: &ArchiveCard, archive: &StagedArchive) -> Result<(), GetError>;
    async fn link(&self, card: &ArchiveCard) -> Result<(), GetError>;
    async fn fail(&self, error: &GetError);
}

pub fn fits_inline(size_bytes: u64) -> bool {
    size_bytes <= MAX_INLINE_BYTES
}

/// Deliver a staged archive. The staging file is removed once, after the outcome is known,
/// whichever branch ran and whether or not it succeeded.
pub async fn deliver(
    result: FetchResult,
    entry: &CatalogEntry,
    host: &FileHost,
    target: &dyn DeliveryTarget,
) -> Result<DeliveryOutcome, GetError> {
    let FetchResult {
        identifier,
        archive,
        source,
    } = result;
    let outcome = send(&archive, identifier.as_str(), source, entry, host, target).await;
    if let Err(e) = archive.discard().await {
        warn!(target = "delivery", appid = %identifier, error = %e, "could not remove staged archive");
    }
    outcome
}

async fn send(
    archive: &StagedArchive,
    appid: &str,
    source: Source,
    entry: &CatalogEntry,
    host: &FileHost,
    target: &dyn DeliveryTarget,
) -> Result<DeliveryOutcome, GetError> {
    let mut card = ArchiveCard {
        appid: appid.to_string(),
        name: entry.display_name.clone(),
        size_bytes: archive.size_bytes().await?,
        source,
        link: None,
    };

    if fits_inline(card.size_bytes) {
        target.attach(&card, archive).await?;
        info!(target = "delivery", appid, bytes = card.size_bytes, "attached inline");
        return Ok(DeliveryOutcome::AttachedInline);
    }

    target
        .progress(&format!(
            "Uploading to file host ({:.2} MB)... ⏳",
            card.size_mib()
        ))
        .await;
    let link = host.upload(archive).await?;
    card.link = Some(link.clone());
    target.link(&card).await?;
    Ok(DeliveryOutcome::UploadedLink(link))
}

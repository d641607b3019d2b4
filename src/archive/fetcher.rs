use super::staging::StagedArchive;
use crate::catalog::Identifier;
use crate::config::fill_template;
use crate::constants::{ARCHIVE_TIMEOUT, BROWSER_USER_AGENT};
use crate::error::GetError;
use reqwest::StatusCode;
use reqwest::header::USER_AGENT;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::time::timeout;
use tracing::{debug, info, instrument};

/// Which archive host served the download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Primary,
    Secondary,
}

impl Source {
    pub fn label(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    /// Name shown on the delivery card.
    pub fn description(self) -> &'static str {
        match self {
            Self::Primary => "Primary DB (GitHub)",
            Self::Secondary => "Mirror (R2)",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug)]
pub struct FetchResult {
    pub identifier: Identifier,
    pub archive: StagedArchive,
    pub source: Source,
}

pub struct ArchiveFetcher {
    http: reqwest::Client,
    primary_template: String,
    secondary_template: String,
    staging_dir: PathBuf,
    idle_timeout: Duration,
}

impl ArchiveFetcher {
    pub fn new(
        http: reqwest::Client,
        primary_template: String,
        secondary_template: String,
        staging_dir: PathBuf,
    ) -> Self {
        Self {
            http,
            primary_template,
            secondary_template,
            staging_dir,
            idle_timeout: ARCHIVE_TIMEOUT,
        }
    }

    /// Longest wait for the response head or for any single body chunk. A host that keeps
    /// sending is never cut off, however long the whole transfer takes.
    pub fn with_idle_timeout(mut self, idle_timeout: Duration) -> Self {
        self.idle_timeout = idle_timeout;
        self
    }

    fn template(&self, source: Source) -> &str {
        match source {
            Source::Primary => &self.primary_template,
            Source::Secondary => &self.secondary_template,
        }
    }

    /// Validate `raw` and download its archive. Invalid input never touches the network.
    pub async fn fetch(&self, raw: &str) -> Result<FetchResult, GetError> {
        let id = Identifier::parse(raw)?;
        self.fetch_id(&id).await
    }

    /// Try the primary host, then the secondary. Only a non-200 status moves on to the
    /// next host; transport faults end the attempt.
    #[instrument(level = "debug", skip(self), fields(appid = %id))]
    pub async fn fetch_id(&self, id: &Identifier) -> Result<FetchResult, GetError> {
        for source in [Source::Primary, Source::Secondary] {
            let url = fill_template(self.template(source), id.as_str());
            let request = self.http.get(&url).header(USER_AGENT, BROWSER_USER_AGENT);
            let resp = timeout(self.idle_timeout, request.send())
                .await
                .map_err(|_| GetError::Stalled(self.idle_timeout))??;
            if resp.status() != StatusCode::OK {
                debug!(target = "fetch", source = %source, status = resp.status().as_u16(), "source miss");
                continue;
            }
            let archive = self.stage(id, resp).await?;
            info!(target = "fetch", appid = %id, source = %source, "archive staged");
            return Ok(FetchResult {
                identifier: id.clone(),
                archive,
                source,
            });
        }
        Err(GetError::NotFound(id.to_string()))
    }

    async fn stage(
        &self,
        id: &Identifier,
        mut resp: reqwest::Response,
    ) -> Result<StagedArchive, GetError> {
        // On any error below `archive` is dropped, which removes the partial file.
        let (archive, mut file) = StagedArchive::create(&self.staging_dir, id).await?;
        loop {
            let next = timeout(self.idle_timeout, resp.chunk())
                .await
                .map_err(|_| GetError::Stalled(self.idle_timeout))?;
            match next? {
                Some(chunk) => file.write_all(&chunk).await?,
                None => break,
            }
        }
        file.flush().await?;
        Ok(archive)
    }
}

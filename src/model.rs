//! The application context shared by every command handler and background task.
//! Built once in `main` and handed to the event handler as an `Arc<AppState>`.

use crate::archive::ArchiveFetcher;
use crate::catalog::CatalogClient;
use crate::config::Config;
use crate::constants::{ARCHIVE_TIMEOUT, DEFAULT_HTTP_TIMEOUT, UPLOAD_TIMEOUT};
use crate::delivery::FileHost;

pub struct AppState {
    pub config: Config,
    /// Store search + app details.
    pub catalog: CatalogClient,
    /// Primary/secondary archive download.
    pub fetcher: ArchiveFetcher,
    /// Upload fallback for archives over the inline limit.
    pub file_host: FileHost,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self, reqwest::Error> {
        // Catalog calls are small and get a total deadline; archive transfers can run long,
        // so those clients only bound connecting and idle waits.
        let http = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()?;
        let downloads = reqwest::Client::builder()
            .connect_timeout(ARCHIVE_TIMEOUT)
            .build()?;
        let uploads = reqwest::Client::builder()
            .connect_timeout(UPLOAD_TIMEOUT)
            .read_timeout(UPLOAD_TIMEOUT)
            .build()?;

        let endpoints = &config.endpoints;
        let catalog = CatalogClient::new(
            http,
            endpoints.catalog_search.clone(),
            endpoints.catalog_details.clone(),
        );
        let fetcher = ArchiveFetcher::new(
            downloads,
            endpoints.primary_archive.clone(),
            endpoints.secondary_archive.clone(),
            config.staging_dir.clone(),
        );
        let file_host = FileHost::new(uploads, endpoints.file_host.clone());
        Ok(Self {
            config,
            catalog,
            fetcher,
            file_host,
        })
    }
}

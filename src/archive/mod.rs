//! Archive download with primary/secondary fallback and transient staging.
pub mod fetcher;
pub mod staging;

pub use fetcher::{ArchiveFetcher, FetchResult, Source};
pub use staging::StagedArchive;

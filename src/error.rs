//! Error kinds surfaced by the catalog, fetch and delivery layers.
use thiserror::Error;

/// Every way a `get` invocation can end without delivering an archive.
#[derive(Error, Debug)]
pub enum GetError {
    #[error("`{0}` is not a valid app id (digits only)")]
    InvalidIdentifier(String),

    #[error("`{0}` was not found on either source")]
    NotFound(String),

    #[error("download failed: {0}")]
    Transfer(#[from] reqwest::Error),

    #[error("download stalled: no data for {0:?}")]
    Stalled(std::time::Duration),

    #[error("upload failed: {0}")]
    Upload(String),

    #[error("staging file error: {0}")]
    Staging(#[from] std::io::Error),

    #[error("could not post the response: {0}")]
    Chat(String),
}

impl GetError {
    /// Text shown to the user in place of the pending status message.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidIdentifier(_) => "Usage: `/get <appid>` (digits only)".to_string(),
            Self::NotFound(id) => {
                format!("`{id}` not found on either source (primary DB and mirror) ❌")
            }
            other => format!("Error: {other}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid catalog url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("catalog returned HTTP {0}")]
    Status(u16),

    #[error("metadata unavailable for `{0}`")]
    MetadataUnavailable(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("DISCORD_TOKEN is missing (set it in the environment or .env)")]
    MissingToken,

    #[error("{name} must be a valid number, got `{value}`")]
    InvalidNumber { name: &'static str, value: String },
}

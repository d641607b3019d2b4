//! Process configuration loaded from the environment (and `.env` via dotenv in `main`).
use crate::constants::{
    APPID_PLACEHOLDER, CATALOG_DETAILS_URL, CATALOG_SEARCH_URL, DEFAULT_PORT, DEFAULT_PREFIX,
    DEFAULT_STAGING_DIR, FILE_HOST_URL, HEADER_IMAGE_TEMPLATE, PRIMARY_ARCHIVE_TEMPLATE,
    SECONDARY_ARCHIVE_TEMPLATE,
};
use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;

/// Remote endpoints the bot talks to. Overridable so tests can point at a mock server.
#[derive(Debug, Clone)]
pub struct Endpoints {
    pub primary_archive: String,
    pub secondary_archive: String,
    pub catalog_search: String,
    pub catalog_details: String,
    pub file_host: String,
    pub header_image: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            primary_archive: PRIMARY_ARCHIVE_TEMPLATE.to_string(),
            secondary_archive: SECONDARY_ARCHIVE_TEMPLATE.to_string(),
            catalog_search: CATALOG_SEARCH_URL.to_string(),
            catalog_details: CATALOG_DETAILS_URL.to_string(),
            file_host: FILE_HOST_URL.to_string(),
            header_image: HEADER_IMAGE_TEMPLATE.to_string(),
        }
    }
}

impl Endpoints {
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            primary_archive: env_or("PRIMARY_ARCHIVE_URL", defaults.primary_archive),
            secondary_archive: env_or("SECONDARY_ARCHIVE_URL", defaults.secondary_archive),
            catalog_search: env_or("CATALOG_SEARCH_URL", defaults.catalog_search),
            catalog_details: env_or("CATALOG_DETAILS_URL", defaults.catalog_details),
            file_host: env_or("FILE_HOST_URL", defaults.file_host),
            header_image: defaults.header_image,
        }
    }

    pub fn header_image_for(&self, appid: &str) -> String {
        fill_template(&self.header_image, appid)
    }
}

/// Substitute `{appid}` into a URL template.
pub fn fill_template(template: &str, appid: &str) -> String {
    template.replace(APPID_PLACEHOLDER, appid)
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub port: u16,
    pub prefix: String,
    /// When set, slash commands are registered to this guild only (instant refresh).
    pub server_id: Option<u64>,
    pub staging_dir: PathBuf,
    pub endpoints: Endpoints,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let discord_token = env::var("DISCORD_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or(ConfigError::MissingToken)?;

        let port = match env::var("PORT") {
            Ok(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidNumber {
                name: "PORT",
                value: raw,
            })?,
            Err(_) => DEFAULT_PORT,
        };

        let server_id = match env::var("SERVER_ID") {
            Ok(raw) if !raw.trim().is_empty() => {
                Some(raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
                    name: "SERVER_ID",
                    value: raw,
                })?)
            }
            _ => None,
        };

        Ok(Self {
            discord_token,
            port,
            prefix: env_or("COMMAND_PREFIX", DEFAULT_PREFIX.to_string()),
            server_id,
            staging_dir: PathBuf::from(env_or("STAGING_DIR", DEFAULT_STAGING_DIR.to_string())),
            endpoints: Endpoints::from_env(),
        })
    }
}

fn env_or(name: &str, default: String) -> String {
    env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_template_substitutes_every_placeholder() {
        assert_eq!(
            fill_template("https://x/{appid}/{appid}.zip", "440"),
            "https://x/440/440.zip"
        );
    }

    #[test]
    fn default_header_image_uses_appid() {
        let e = Endpoints::default();
        assert_eq!(
            e.header_image_for("730"),
            "https://steamcdn-a.akamaihd.net/steam/apps/730/header.jpg"
        );
    }
}

// Central constants for remote endpoints, limits and timeouts.
use std::time::Duration;

// Default endpoint templates. `{appid}` is substituted with the identifier.
pub const PRIMARY_ARCHIVE_TEMPLATE: &str =
    "https://raw.githubusercontent.com/MOLDY12457/TanBot20000.games/master/{appid}.zip";
pub const SECONDARY_ARCHIVE_TEMPLATE: &str =
    "https://pub-5b6d3b7c03fd4ac1afb5bd3017850e20.r2.dev/{appid}.zip";
pub const CATALOG_SEARCH_URL: &str = "https://steamcommunity.com/actions/SearchApps";
pub const CATALOG_DETAILS_URL: &str = "http://store.steampowered.com/api/appdetails";
pub const FILE_HOST_URL: &str = "https://catbox.moe/user/api.php";
pub const HEADER_IMAGE_TEMPLATE: &str =
    "https://steamcdn-a.akamaihd.net/steam/apps/{appid}/header.jpg";

/// Placeholder substituted in every URL template.
pub const APPID_PLACEHOLDER: &str = "{appid}";

/// Discord's inline attachment ceiling for bots without boosts.
pub const MAX_INLINE_BYTES: u64 = 8 * 1024 * 1024;
pub const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

// Transfer timeouts bound connecting and each wait for data, not the whole transfer.
pub const ARCHIVE_TIMEOUT: Duration = Duration::from_secs(100);
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(300);
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);
// Some archive hosts reject non-browser agents.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0";

// Discord select menus cap out at 25 options and 100-char labels.
pub const MAX_SEARCH_RESULTS: usize = 25;
pub const MAX_NAME_CHARS: usize = 100;

pub const DEFAULT_PORT: u16 = 10000;
pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_STAGING_DIR: &str = "zip_downloads";

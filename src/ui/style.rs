//! Central UI style constants and helpers.
use serenity::builder::CreateEmbed;

pub const COLOR_CATALOG: u32 = 0x1B2838; // Store navy
pub const COLOR_HELP: u32 = 0x5865F2; // Blurple
pub const COLOR_ALERT: u32 = 0xE74C3C; // Red

pub const EMOJI_SEARCH: &str = "🔍";
pub const EMOJI_PENDING: &str = "⏳";
pub const EMOJI_FAIL: &str = "❌";

/// Size in MiB as shown on archive cards.
pub fn size_label(mib: f64) -> String {
    format!("`{mib:.2} MB`")
}

/// Wrap an identifier in inline code.
pub fn code(value: &str) -> String {
    format!("`{value}`")
}

/// Convenience builder for an alert/error-styled embed.
pub fn error_embed<T: Into<String>, U: Into<String>>(title: T, description: U) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .color(COLOR_ALERT)
}

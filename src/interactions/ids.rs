//! Centralized custom_id string constants for interaction components.
//! The segment before the first `_` is the family the handler routes on.

pub const SEARCH_SELECT: &str = "search_select";
pub const HELP_SELECT: &str = "help_select_command";

/// Routing family of a custom id (`search_select` -> `search`).
pub fn family(custom_id: &str) -> &str {
    custom_id.split('_').next().unwrap_or("")
}

//! Catalog metadata: free-text search and per-identifier product details.
pub mod client;
pub mod identifier;

pub use client::CatalogClient;
pub use identifier::Identifier;

use crate::constants::MAX_NAME_CHARS;

/// Human-readable metadata for one catalog entry. Fetched per request, never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub appid: String,
    pub display_name: String,
    pub developers: Vec<String>,
    pub release_date: Option<String>,
    pub price: Option<String>,
}

impl CatalogEntry {
    /// Stand-in used whenever metadata is missing, so delivery never blocks on it.
    pub fn placeholder(id: &Identifier) -> Self {
        Self {
            appid: id.to_string(),
            display_name: format!("Game {id}"),
            developers: Vec::new(),
            release_date: None,
            price: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub appid: String,
    pub name: String,
}

/// Shorten a name to fit a select-menu label.
pub fn display_name(name: &str) -> String {
    if name.chars().count() > MAX_NAME_CHARS {
        let head: String = name.chars().take(MAX_NAME_CHARS - 3).collect();
        format!("{head}...")
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_truncates_past_limit() {
        let exact = "a".repeat(100);
        assert_eq!(display_name(&exact), exact);
        let long = "b".repeat(101);
        let shown = display_name(&long);
        assert_eq!(shown.chars().count(), 100);
        assert!(shown.ends_with("..."));
    }

    #[test]
    fn placeholder_names_the_identifier() {
        let id = Identifier::parse("730").unwrap();
        let entry = CatalogEntry::placeholder(&id);
        assert_eq!(entry.display_name, "Game 730");
        assert!(entry.developers.is_empty());
    }
}

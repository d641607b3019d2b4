//! Shared rendering helpers for embeds and components.
pub mod style;

//! Central router targets for component interactions.
//!
//! `handler.rs` picks a module here based on the component's custom_id family.

pub mod ids;
pub mod search_handler;
pub mod util;

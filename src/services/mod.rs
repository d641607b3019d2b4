//! Workflows that sit between the command surface and the remote clients.
pub mod get;

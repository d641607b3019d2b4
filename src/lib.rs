// Library entry so integration tests can reference internal modules.
// The binary (`main.rs`) only wires configuration, logging and the two tasks together.
pub mod archive;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod constants;
pub mod delivery;
pub mod error;
pub mod handler;
pub mod interactions;
pub mod liveness;
pub mod logging;
pub mod model;
pub mod services;
pub mod ui;

pub use model::AppState;

//! Process-wide tracing setup.
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// `RUST_LOG` directives, or `info` when unset or unparsable.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Load `.env` (or `env_file`) into the process environment, then install the subscriber.
/// The file is read first so a `RUST_LOG` set there takes effect.
pub fn init(env_file: Option<&Path>) {
    let loaded = match env_file {
        Some(path) => dotenv::from_path(path).is_ok(),
        None => dotenv::dotenv().is_ok(),
    };
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
    tracing::debug!(target = "main", env_file_loaded = loaded, "logging initialised");
}

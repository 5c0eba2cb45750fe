//! Logging utilities and structured logging support

pub use log::{debug, info, warn, error, trace};

/// Initialize the logging system
///
/// `default_level` applies when `RUST_LOG` is not set; an unparsable level
/// falls back to `info`.
pub fn init(default_level: &str) {
    let level = default_level.parse().unwrap_or(log::LevelFilter::Info);
    // A second initialisation (tests, embedding) is not an error worth surfacing
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

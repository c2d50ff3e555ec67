#![deny(missing_docs)]
//! Shared logging utilities for the podcast feed workspace.
//!
//! This crate provides the `feed_*` logging macros used by the library
//! crates, the environment-driven level lookup used by the app, and a
//! minimal test initializer for the global logger.

use std::str::FromStr;

use log::LevelFilter;

/// Environment variable consulted for the log level (`trace` .. `error`, `off`).
pub const LOG_LEVEL_ENV: &str = "PODCAST_LOG";

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! feed_trace {
    ($($arg:tt)*) => {{
        log::trace!($($arg)*);
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! feed_info {
    ($($arg:tt)*) => {{
        log::info!($($arg)*);
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! feed_debug {
    ($($arg:tt)*) => {{
        log::debug!($($arg)*);
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! feed_warn {
    ($($arg:tt)*) => {{
        log::warn!($($arg)*);
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! feed_error {
    ($($arg:tt)*) => {{
        log::error!($($arg)*);
    }};
}

/// Parses a level name such as `"debug"` or `"WARN"`.
///
/// Returns `None` for empty or unknown names.
pub fn parse_level(raw: &str) -> Option<LevelFilter> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    LevelFilter::from_str(trimmed).ok()
}

/// Reads [`LOG_LEVEL_ENV`] and parses it with [`parse_level`].
pub fn level_from_env() -> Option<LevelFilter> {
    std::env::var(LOG_LEVEL_ENV)
        .ok()
        .as_deref()
        .and_then(parse_level)
}

/// Initializes a simple terminal logger for use in tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let default_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let level = level_from_env().unwrap_or(default_level);

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

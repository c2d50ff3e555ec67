//! Platform logging initialization for podcast_app.
//!
//! Terminal output goes to stderr so command output on stdout stays clean.
//! The optional file log is `./podcast_app.log` in the working directory.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILENAME: &str = "./podcast_app.log";

/// Destination for log output.
pub(crate) enum LogDestination {
    /// Write to stderr.
    Terminal,
    /// Write to stderr and ./podcast_app.log.
    Both,
}

/// Initialize the logger with the specified destination.
///
/// The level comes from `PODCAST_LOG` and defaults to `warn`.
pub(crate) fn initialize(destination: LogDestination) {
    let level = feed_logging::level_from_env().unwrap_or(LevelFilter::Warn);

    let config = build_config();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];
    if let LogDestination::Both = destination {
        // The file always records at least info.
        if let Some(file_logger) = create_file_logger(level.max(LevelFilter::Info), config) {
            loggers.push(file_logger);
        }
    }

    let _ = CombinedLogger::init(loggers);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from(LOG_FILENAME);
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}

//! Optional RON configuration for the app.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use feed_client::{FetchSettings, DEFAULT_FEED_BASE};
use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_CONFIG_FILENAME: &str = "podcast_app.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub feed_base: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub log_to_file: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            feed_base: DEFAULT_FEED_BASE.to_string(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_bytes: fetch.max_bytes,
            log_to_file: false,
        }
    }
}

impl AppConfig {
    pub(crate) fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            max_bytes: self.max_bytes,
            ..FetchSettings::default()
        }
    }
}

/// Where the active configuration came from. Loading runs before logging is
/// initialized, so the caller reports this once the logger is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ConfigSource {
    Defaults,
    File(PathBuf),
}

/// Load `explicit` if given (it must exist), otherwise `./podcast_app.ron`
/// when present, otherwise defaults.
pub(crate) fn load_config(explicit: Option<&Path>) -> anyhow::Result<(AppConfig, ConfigSource)> {
    load_config_or(explicit, Path::new(DEFAULT_CONFIG_FILENAME))
}

fn load_config_or(
    explicit: Option<&Path>,
    fallback: &Path,
) -> anyhow::Result<(AppConfig, ConfigSource)> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None if fallback.exists() => fallback.to_path_buf(),
        None => return Ok((AppConfig::default(), ConfigSource::Defaults)),
    };
    let config = read_config(&path)?;
    Ok((config, ConfigSource::File(path)))
}

fn read_config(path: &Path) -> anyhow::Result<AppConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    ron::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))
}

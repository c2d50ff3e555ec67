use std::process::ExitCode;

use anyhow::Context;
use feed_client::{FeedClient, FeedError, TransportKind};
use feed_core::id_from_slug;
use feed_logging::{feed_debug, feed_error, feed_info};

use super::config::{load_config, AppConfig, ConfigSource};
use super::logging::{self, LogDestination};
use super::render;
use crate::{Cli, Command};

const EXIT_UNAVAILABLE: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;

/// Outcome of a command that reached the feed.
enum Outcome {
    Printed(String),
    NotFound,
}

pub fn run(cli: Cli) -> ExitCode {
    let (config, source) = match load_config(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(err) => {
            eprintln!("Configuration error: {err:#}");
            return ExitCode::from(EXIT_UNAVAILABLE);
        }
    };

    let destination = if cli.log_file || config.log_to_file {
        LogDestination::Both
    } else {
        LogDestination::Terminal
    };
    logging::initialize(destination);
    match &source {
        ConfigSource::File(path) => feed_info!("Loaded config from {}", path.display()),
        ConfigSource::Defaults => feed_debug!("No config file found; using defaults"),
    }

    match execute(&cli, config) {
        Ok(Outcome::Printed(text)) => {
            print!("{text}");
            ExitCode::SUCCESS
        }
        Ok(Outcome::NotFound) => {
            println!("Episode not found");
            ExitCode::from(EXIT_NOT_FOUND)
        }
        Err(err) => {
            feed_error!("{err:#}");
            eprintln!("Feed unavailable: {err:#}");
            ExitCode::from(EXIT_UNAVAILABLE)
        }
    }
}

fn execute(cli: &Cli, mut config: AppConfig) -> anyhow::Result<Outcome> {
    if let Some(base) = &cli.feed_base {
        config.feed_base = base.clone();
    }
    let client = FeedClient::new(&config.feed_base, config.fetch_settings())
        .context("invalid feed configuration")?;
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;

    feed_info!("Using feed at {}", client.endpoints().base());
    runtime.block_on(dispatch(&client, &cli.command))
}

async fn dispatch(client: &FeedClient, command: &Command) -> anyhow::Result<Outcome> {
    match command {
        Command::List => {
            let episodes = client.get_episodes().await.context("loading episodes")?;
            let mut text = String::new();
            render::episode_list(&mut text, &episodes)?;
            Ok(Outcome::Printed(text))
        }
        Command::Feed => {
            let feed = client.get_feed().await.context("loading feed")?;
            let mut text = String::new();
            render::feed_overview(&mut text, &feed)?;
            Ok(Outcome::Printed(text))
        }
        Command::Show { slug, exact } => {
            let lookup = if *exact {
                client.find_episode_by_slug(slug).await
            } else {
                client.get_episode(id_from_slug(slug)).await
            };
            match lookup {
                Ok(Some(episode)) => {
                    let mut text = String::new();
                    render::episode_detail(&mut text, &episode)?;
                    Ok(Outcome::Printed(text))
                }
                Ok(None) => Ok(Outcome::NotFound),
                // A 404 from the item endpoint means the id is unknown.
                Err(FeedError::Transport(err)) if err.kind == TransportKind::HttpStatus(404) => {
                    Ok(Outcome::NotFound)
                }
                Err(err) => Err(err).with_context(|| format!("loading episode {slug:?}")),
            }
        }
    }
}

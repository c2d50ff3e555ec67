mod platform;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// Browse a podcast's published episodes from the command line.
#[derive(Debug, Parser)]
#[command(name = "podcast_app", version)]
pub struct Cli {
    /// RON config file (defaults to ./podcast_app.ron when present).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the feed origin, e.g. https://feed.example.com
    #[arg(long, global = true)]
    pub feed_base: Option<String>,

    /// Also write logs to ./podcast_app.log
    #[arg(long, global = true)]
    pub log_file: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all episodes with their slugs.
    List,
    /// Show one episode, addressed by its slug.
    Show {
        slug: String,
        /// Match the slug against every episode instead of decoding an id from it.
        #[arg(long)]
        exact: bool,
    },
    /// Show the podcast's feed-level details.
    Feed,
}

fn main() -> ExitCode {
    platform::app::run(Cli::parse())
}

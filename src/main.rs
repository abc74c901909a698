//! Track Relay - a chat bot that turns Apple Music links into Yandex Music links.
//!
//! Incoming text is parsed as an Apple Music track link, resolved through the
//! iTunes lookup API and searched for in the Yandex Music catalog. The bot
//! replies with the track name, album and the matching Yandex Music link.

pub mod bot;
pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod relay;
#[cfg(test)]
pub mod test_utils;

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    let args = cli::Cli::parse();

    // Initialize logging
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("track_relay=info"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(filter)
        .init();

    cli::run_command(&args)
}

//! CLI command definitions and dispatch.
//!
//! Each subcommand is implemented in its own submodule:
//! - `bot`: long-polling Telegram bot
//! - `resolve`: one-shot relay of a single message
//! - `settings`: config file inspection and initialisation

mod bot;
mod resolve;
mod settings;

use clap::{Parser, Subcommand};
use tokio::runtime::Runtime;

use crate::config;

pub use bot::cmd_run;
pub use resolve::cmd_resolve;
pub use settings::cmd_config;

/// Track Relay CLI
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (default)
    Run {
        /// Bot token (or set TELEGRAM_BOT_TOKEN env var)
        #[arg(short, long, env = config::TELEGRAM_TOKEN_ENV, hide_env_values = true)]
        token: Option<String>,
    },
    /// Relay one message and print the reply
    Resolve {
        /// Message text, usually an Apple Music link
        text: String,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

/// Run the specified CLI command; no command runs the bot.
pub fn run_command(cli: &Cli) -> anyhow::Result<()> {
    let mut config = config::load();
    config.apply_env();

    match &cli.command {
        Some(Commands::Run { token }) => {
            let rt = Runtime::new()?;
            cmd_run(&rt, &config, token.as_deref())
        }
        None => {
            let rt = Runtime::new()?;
            cmd_run(&rt, &config, None)
        }
        Some(Commands::Resolve { text }) => {
            let rt = Runtime::new()?;
            cmd_resolve(&rt, &config, text)
        }
        Some(Commands::Config { init }) => cmd_config(&config, *init),
    }
}

//! Command-line interface for track-relay.
//!
//! Runs the Telegram bot by default; the other commands resolve a single
//! link or manage the config file.

mod commands;

pub use commands::{Cli, Commands, run_command};

//! Config file command.

use crate::config::{self, Config};
use crate::error::ResultExt;

/// Print the config location and effective settings, optionally writing defaults
pub fn cmd_config(config: &Config, init: bool) -> anyhow::Result<()> {
    let path = config::config_path()
        .ok_or(config::ConfigError::NoConfigDir)
        .with_context("locating config file")?;

    if init {
        if path.exists() {
            println!("Config file already exists at {}", path.display());
        } else {
            let written = config::save(&Config::default()).with_context("writing default config")?;
            println!("Wrote default config to {}", written.display());
        }
    } else {
        println!("Config file: {}", path.display());
        if !path.exists() {
            println!("(not present, using defaults; run `track-relay config --init`)");
        }
    }

    println!();
    print!("{}", toml::to_string_pretty(&redacted(config))?);
    Ok(())
}

/// Copy of `config` safe to print
fn redacted(config: &Config) -> Config {
    let mut shown = config.clone();
    for token in [
        &mut shown.credentials.telegram_bot_token,
        &mut shown.credentials.yandex_music_token,
    ] {
        if token.is_some() {
            *token = Some("<set>".to_string());
        }
    }
    shown
}

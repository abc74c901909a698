//! One-shot relay command.

use tokio::runtime::Runtime;

use crate::config::Config;
use crate::error::ResultExt;
use crate::relay::{RelayOutcome, RelayService};

/// Relay `text` once and print the reply the bot would send
pub fn cmd_resolve(rt: &Runtime, config: &Config, text: &str) -> anyhow::Result<()> {
    let service = RelayService::from_config(&config.relay_config())
        .with_context("building relay pipeline")?;

    let outcome = rt.block_on(service.process(text));
    match &outcome {
        RelayOutcome::Rejected { stage, reason } => {
            tracing::debug!("Rejected at {:?}: {}", stage, reason);
        }
        RelayOutcome::Done { matched, .. } => {
            tracing::debug!("Match outcome: {:?}", matched);
        }
    }

    println!("{}", outcome.reply_text());
    Ok(())
}

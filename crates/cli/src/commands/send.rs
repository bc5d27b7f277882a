//! One-shot delivery command.

use tracing::info;

use crate::config::BotConfig;
use crate::error::Result;
use crate::handler::slack_digest;

/// Runs one digest cycle into `channel`. Unlike the mention handler, errors
/// propagate so the process exits non-zero.
pub async fn run(config: &BotConfig, channel: &str) -> Result<()> {
	config.require_token()?;

	let report = slack_digest(config)?.run(channel).await?;
	info!(target = "weekly", channel, lines = report.lines, pages = report.pages, "sent digest");
	println!("Posted {} page(s) to {channel}", report.pages);
	Ok(())
}

//! Top-level mention handling.
//!
//! This is the single error boundary of a digest run: whatever fails in
//! fetch, parse or delivery is logged here and dropped. Nothing is retried
//! and nothing is reported back to the channel.

use async_trait::async_trait;
use tracing::{error, info};
use weekly::{ArticleSource, Digest, MessageSink};

use crate::config::BotConfig;
use crate::error::Result;
use crate::fetch::HttpArticleSource;
use crate::slack::SlackClient;

/// The production pipeline: HTTP fetch in, Slack Web API out.
pub type SlackDigest = Digest<HttpArticleSource, SlackClient>;

/// Reacts to an app mention in `channel`.
#[async_trait]
pub trait MentionResponder: Send + Sync {
	async fn respond(&self, channel: &str);
}

#[async_trait]
impl<S, M> MentionResponder for Digest<S, M>
where
	S: ArticleSource,
	M: MessageSink,
{
	async fn respond(&self, channel: &str) {
		match self.run(channel).await {
			Ok(report) => info!(target = "weekly", channel, lines = report.lines, pages = report.pages, "responded to mention"),
			Err(err) => error!(target = "weekly", channel, error = %err, "Error responding to mention"),
		}
	}
}

/// Wires the HTTP source and Slack client from configuration.
pub fn slack_digest(config: &BotConfig) -> Result<SlackDigest> {
	let source = HttpArticleSource::with_default_client()?;
	let sink = SlackClient::new(reqwest::Client::new(), config.slack_api_url.clone(), config.bot_token.clone());
	Ok(Digest::new(source, sink, config.base_url.clone()).with_page_delay(config.page_delay))
}

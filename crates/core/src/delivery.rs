//! One complete digest run: fetch, parse, paginate, build, deliver.
//!
//! The page fetch and the message post are external collaborators reached
//! through [`ArticleSource`] and [`MessageSink`]. A run keeps no state
//! between invocations; every call re-fetches and re-parses the article.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::article::parse_article;
use crate::error::Result;
use crate::message::{OutgoingMessage, Page, build_message, paginate};

/// Pause between consecutive page posts.
pub const PAGE_DELAY: Duration = Duration::from_secs(3);

/// Path of the latest article under the site's base URL.
pub const LATEST_PATH: &str = "latest";

/// Produces raw HTML for a URL.
#[async_trait]
pub trait ArticleSource: Send + Sync {
	async fn fetch(&self, url: &str) -> Result<String>;
}

/// Posts one message to a channel.
#[async_trait]
pub trait MessageSink: Send + Sync {
	async fn post_message(&self, channel: &str, message: &OutgoingMessage) -> Result<()>;
}

/// URL of the latest article for `base_url`.
pub fn latest_url(base_url: &str) -> String {
	format!("{}/{LATEST_PATH}", base_url.trim_end_matches('/'))
}

/// Builds and posts each page in order, pausing `delay` after every post.
///
/// Stops at the first failed post. Returns the number of pages delivered.
pub async fn deliver_pages(sink: &dyn MessageSink, channel: &str, pages: &[Page], delay: Duration) -> Result<usize> {
	for (index, page) in pages.iter().enumerate() {
		let message = build_message(page);
		debug!(target = "weekly", channel, page = index + 1, blocks = message.blocks.len(), "posting page");
		sink.post_message(channel, &message).await?;
		tokio::time::sleep(delay).await;
	}

	info!(target = "weekly", channel, pages = pages.len(), "digest delivered");
	Ok(pages.len())
}

/// Summary of a finished run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigestReport {
	pub lines: usize,
	pub pages: usize,
}

/// The fetch-to-delivery pipeline bound to one newsletter site.
pub struct Digest<S, M> {
	source: S,
	sink: M,
	base_url: String,
	page_delay: Duration,
}

impl<S, M> Digest<S, M>
where
	S: ArticleSource,
	M: MessageSink,
{
	pub fn new(source: S, sink: M, base_url: impl Into<String>) -> Self {
		Self {
			source,
			sink,
			base_url: base_url.into(),
			page_delay: PAGE_DELAY,
		}
	}

	/// Overrides the pause between page posts.
	pub fn with_page_delay(mut self, delay: Duration) -> Self {
		self.page_delay = delay;
		self
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	/// Fetches the latest article and splits it into pages.
	pub async fn pages(&self) -> Result<(usize, Vec<Page>)> {
		let url = latest_url(&self.base_url);
		info!(target = "weekly", %url, "fetching latest article");

		let html = self.source.fetch(&url).await?;
		let lines = parse_article(&html)?;
		let line_count = lines.len();
		Ok((line_count, paginate(lines)))
	}

	/// Runs one full cycle and posts every page to `channel`.
	pub async fn run(&self, channel: &str) -> Result<DigestReport> {
		let (lines, pages) = self.pages().await?;
		let pages = deliver_pages(&self.sink, channel, &pages, self.page_delay).await?;
		Ok(DigestReport { lines, pages })
	}
}

//! HTTP article fetcher.

use async_trait::async_trait;
use tracing::debug;
use weekly::ArticleSource;

/// Fetches article HTML over HTTP.
#[derive(Debug, Clone)]
pub struct HttpArticleSource {
	client: reqwest::Client,
}

impl HttpArticleSource {
	pub fn new(client: reqwest::Client) -> Self {
		Self { client }
	}

	/// Builds a source with its own client.
	pub fn with_default_client() -> crate::error::Result<Self> {
		let client = reqwest::Client::builder()
			.user_agent(concat!("nvim-weekly/", env!("CARGO_PKG_VERSION")))
			.build()?;
		Ok(Self::new(client))
	}
}

#[async_trait]
impl ArticleSource for HttpArticleSource {
	async fn fetch(&self, url: &str) -> weekly::Result<String> {
		let response = self.client.get(url).send().await.map_err(|e| weekly::Error::fetch(url, e))?;

		let status = response.status();
		if !status.is_success() {
			return Err(weekly::Error::fetch(url, format!("unexpected status {status}")));
		}

		let body = response.text().await.map_err(|e| weekly::Error::fetch(url, e))?;
		debug!(target = "weekly", %url, bytes = body.len(), "fetched article");
		Ok(body)
	}
}

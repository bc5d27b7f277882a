//! Slack Web API client.

use async_trait::async_trait;
use nvim_weekly_protocol::{ApiResponse, PostMessage};
use tracing::debug;
use weekly::{MessageSink, OutgoingMessage};

/// Minimal `chat.postMessage` client.
#[derive(Debug, Clone)]
pub struct SlackClient {
	client: reqwest::Client,
	api_url: String,
	token: String,
}

impl SlackClient {
	pub fn new(client: reqwest::Client, api_url: impl Into<String>, token: impl Into<String>) -> Self {
		Self {
			client,
			api_url: api_url.into().trim_end_matches('/').to_string(),
			token: token.into(),
		}
	}

	fn method_url(&self, method: &str) -> String {
		format!("{}/{method}", self.api_url)
	}

	/// Posts a message and returns Slack's response envelope.
	///
	/// Transport failures and `ok: false` responses both surface as
	/// delivery errors.
	pub async fn chat_post_message(&self, body: &PostMessage) -> weekly::Result<ApiResponse> {
		let channel = body.channel.as_str();
		let response = self
			.client
			.post(self.method_url("chat.postMessage"))
			.bearer_auth(&self.token)
			.json(body)
			.send()
			.await
			.map_err(|e| weekly::Error::delivery(channel, e))?;

		let status = response.status();
		if !status.is_success() {
			return Err(weekly::Error::delivery(channel, format!("unexpected status {status}")));
		}

		let api: ApiResponse = response.json().await.map_err(|e| weekly::Error::delivery(channel, e))?;
		if !api.ok {
			let reason = api.error.as_deref().unwrap_or("unknown_error");
			return Err(weekly::Error::delivery(channel, reason));
		}

		debug!(target = "weekly", channel, ts = api.ts.as_deref().unwrap_or(""), "message posted");
		Ok(api)
	}
}

#[async_trait]
impl MessageSink for SlackClient {
	async fn post_message(&self, channel: &str, message: &OutgoingMessage) -> weekly::Result<()> {
		let body = PostMessage {
			channel: channel.to_string(),
			text: message.text.clone(),
			blocks: message.blocks.clone(),
		};
		self.chat_post_message(&body).await.map(|_| ())
	}
}

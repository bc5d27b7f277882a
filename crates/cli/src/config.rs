//! Resolved runtime configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use url::Url;

use crate::cli::Settings;
use crate::error::{BotError, Result};

/// Immutable configuration shared by every request handler.
#[derive(Debug, Clone)]
pub struct BotConfig {
	pub bot_token: String,
	pub signing_secret: String,
	pub port: u16,
	pub base_url: String,
	pub slack_api_url: String,
	pub page_delay: Duration,
}

impl BotConfig {
	/// Validates raw settings. URLs must be absolute http(s) URLs.
	pub fn from_settings(settings: &Settings) -> Result<Self> {
		Ok(Self {
			bot_token: settings.bot_token.clone(),
			signing_secret: settings.signing_secret.clone(),
			port: settings.port,
			base_url: validate_url("base-url", &settings.base_url)?,
			slack_api_url: validate_url("slack-api-url", &settings.slack_api_url)?,
			page_delay: Duration::from_secs(settings.page_delay_secs),
		})
	}

	/// Fails when no bot token is configured.
	pub fn require_token(&self) -> Result<&str> {
		if self.bot_token.is_empty() {
			return Err(BotError::Config("SLACK_BOT_TOKEN is not set".into()));
		}
		Ok(&self.bot_token)
	}
}

/// Loads `.env` from the working directory or its ancestors into the
/// process environment. Variables already set are left untouched.
pub fn load_env_file() -> Option<PathBuf> {
	dotenvy::dotenv().ok()
}

/// Loads a specific env file. Returns `false` when it is missing or malformed.
pub fn load_env_file_from(path: &Path) -> bool {
	dotenvy::from_path(path).is_ok()
}

fn validate_url(name: &str, raw: &str) -> Result<String> {
	let url = Url::parse(raw).map_err(|e| BotError::Config(format!("{name} '{raw}': {e}")))?;
	match url.scheme() {
		"http" | "https" => Ok(raw.trim_end_matches('/').to_string()),
		scheme => Err(BotError::Config(format!("{name} '{raw}': unsupported scheme {scheme}"))),
	}
}

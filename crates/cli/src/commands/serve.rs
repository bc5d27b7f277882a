//! Events API server command.

use std::sync::Arc;

use tracing::warn;

use crate::config::BotConfig;
use crate::error::Result;
use crate::handler::slack_digest;
use crate::server::{self, AppState};
use crate::signature::SignatureVerifier;

pub async fn run(config: &BotConfig) -> Result<()> {
	config.require_token()?;

	let verifier = if config.signing_secret.is_empty() {
		warn!(target = "weekly", "SLACK_SIGNING_SECRET is not set; accepting unsigned requests");
		None
	} else {
		Some(SignatureVerifier::new(config.signing_secret.clone()))
	};

	let digest = Arc::new(slack_digest(config)?);
	server::serve(AppState::new(digest, verifier), config.port).await
}

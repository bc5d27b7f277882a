//! Slack request signing (`v0` scheme).
//!
//! Each Events API request carries `X-Slack-Request-Timestamp` and
//! `X-Slack-Signature`. The signature is `v0=` followed by the hex HMAC-SHA256
//! of `v0:{timestamp}:{body}` keyed with the app's signing secret.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{BotError, Result};

type HmacSha256 = Hmac<Sha256>;

pub const TIMESTAMP_HEADER: &str = "x-slack-request-timestamp";
pub const SIGNATURE_HEADER: &str = "x-slack-signature";

/// Requests older than this many seconds are treated as replays.
pub const MAX_AGE_SECS: u64 = 60 * 5;

const VERSION: &str = "v0";

#[derive(Debug, Clone)]
pub struct SignatureVerifier {
	secret: String,
}

impl SignatureVerifier {
	pub fn new(secret: impl Into<String>) -> Self {
		Self { secret: secret.into() }
	}

	fn mac(&self, timestamp: &str, body: &[u8]) -> Result<HmacSha256> {
		let mut mac = HmacSha256::new_from_slice(self.secret.as_bytes()).map_err(|_| BotError::Signature("invalid signing secret"))?;
		mac.update(VERSION.as_bytes());
		mac.update(b":");
		mac.update(timestamp.as_bytes());
		mac.update(b":");
		mac.update(body);
		Ok(mac)
	}

	/// Computes the `v0=...` signature for a request.
	pub fn sign(&self, timestamp: &str, body: &[u8]) -> Result<String> {
		let digest = self.mac(timestamp, body)?.finalize().into_bytes();
		Ok(format!("{VERSION}={}", hex::encode(digest)))
	}

	/// Checks freshness and signature of a request received at `now` (unix seconds).
	pub fn verify(&self, timestamp: Option<&str>, signature: Option<&str>, body: &[u8], now: u64) -> Result<()> {
		let timestamp = timestamp.ok_or(BotError::Signature("missing timestamp"))?;
		let signature = signature.ok_or(BotError::Signature("missing signature"))?;

		let sent: u64 = timestamp.trim().parse().map_err(|_| BotError::Signature("malformed timestamp"))?;
		if now.abs_diff(sent) > MAX_AGE_SECS {
			return Err(BotError::Signature("stale timestamp"));
		}

		let expected = signature
			.strip_prefix("v0=")
			.and_then(|digest| hex::decode(digest).ok())
			.ok_or(BotError::Signature("malformed signature"))?;

		self.mac(timestamp, body)?
			.verify_slice(&expected)
			.map_err(|_| BotError::Signature("signature mismatch"))
	}
}

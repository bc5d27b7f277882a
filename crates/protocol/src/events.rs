//! Events API envelopes.
//!
//! Slack posts one of these envelopes to the bot's request URL. Only the
//! handshake and the `event_callback` wrapper are modelled; inner events the
//! bot does not react to fall into [`Event::Other`].

use serde::{Deserialize, Serialize};

/// Outer envelope of an Events API request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Envelope {
	/// Handshake sent when the request URL is configured.
	UrlVerification { challenge: String },
	/// A subscribed event.
	EventCallback {
		#[serde(default)]
		team_id: Option<String>,
		#[serde(default)]
		event_id: Option<String>,
		event: Event,
	},
	#[serde(other)]
	Other,
}

/// Inner event payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
	AppMention(AppMention),
	#[serde(other)]
	Other,
}

/// The bot was @-mentioned in a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppMention {
	pub channel: String,
	#[serde(default)]
	pub user: Option<String>,
	#[serde(default)]
	pub text: Option<String>,
	#[serde(default)]
	pub ts: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_url_verification() {
		let json = r#"{"token":"t","challenge":"abc123","type":"url_verification"}"#;
		let env: Envelope = serde_json::from_str(json).unwrap();
		assert!(matches!(env, Envelope::UrlVerification { challenge } if challenge == "abc123"));
	}

	#[test]
	fn parses_app_mention_callback() {
		let json = r#"{
			"type": "event_callback",
			"team_id": "T1",
			"event_id": "Ev1",
			"event": {"type": "app_mention", "channel": "C42", "user": "U1", "text": "<@B1> news", "ts": "1.2"}
		}"#;
		let env: Envelope = serde_json::from_str(json).unwrap();
		match env {
			Envelope::EventCallback {
				event: Event::AppMention(mention),
				..
			} => assert_eq!(mention.channel, "C42"),
			other => panic!("unexpected envelope: {other:?}"),
		}
	}

	#[test]
	fn unknown_inner_event_is_other() {
		let json = r#"{"type":"event_callback","event":{"type":"reaction_added","user":"U1"}}"#;
		let env: Envelope = serde_json::from_str(json).unwrap();
		assert!(matches!(env, Envelope::EventCallback { event: Event::Other, .. }));
	}

	#[test]
	fn unknown_envelope_is_other() {
		let json = r#"{"type":"app_rate_limited","minute_rate_limited":1}"#;
		let env: Envelope = serde_json::from_str(json).unwrap();
		assert!(matches!(env, Envelope::Other));
	}
}

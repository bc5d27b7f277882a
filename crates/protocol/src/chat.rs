//! `chat.postMessage` request and response bodies.

use serde::{Deserialize, Serialize};

use crate::blocks::Block;

/// Body of a `chat.postMessage` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostMessage {
	pub channel: String,
	/// Fallback text shown in notifications.
	pub text: String,
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub blocks: Vec<Block>,
}

/// Envelope returned by every Web API method.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiResponse {
	pub ok: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub error: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub channel: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ts: Option<String>,
}

//! Block Kit layout blocks.

use serde::{Deserialize, Serialize};

/// A single layout block inside a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
	/// Text section rendered with mrkdwn.
	Section { block_id: String, text: TextObject },
	/// Standalone image.
	Image { image_url: String, alt_text: String },
}

impl Block {
	/// Builds a mrkdwn section block.
	pub fn section(block_id: impl Into<String>, text: impl Into<String>) -> Self {
		Block::Section {
			block_id: block_id.into(),
			text: TextObject::mrkdwn(text),
		}
	}

	/// Builds an image block.
	pub fn image(image_url: impl Into<String>, alt_text: impl Into<String>) -> Self {
		Block::Image {
			image_url: image_url.into(),
			alt_text: alt_text.into(),
		}
	}
}

/// Composition text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextObject {
	#[serde(rename = "type")]
	pub kind: TextKind,
	pub text: String,
}

impl TextObject {
	pub fn mrkdwn(text: impl Into<String>) -> Self {
		Self {
			kind: TextKind::Mrkdwn,
			text: text.into(),
		}
	}
}

/// Text formatting flavour of a [`TextObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextKind {
	Mrkdwn,
	PlainText,
}

//! Paging and Block Kit assembly.

mod blocks;
mod pager;

use nvim_weekly_protocol::Block;
use serde::Serialize;

pub use blocks::{build_blocks, build_message, extract_image_url};
pub use pager::{PAGE_BUDGET, paginate, paginate_with_budget};

/// Fallback text sent with every page.
pub const NOTIFICATION_TEXT: &str = "Nvim Weekly News!";

/// Alt text attached to every image block.
pub const IMAGE_ALT_TEXT: &str = "Image showcasing the plugin";

/// An ordered group of formatted lines delivered as one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
	lines: Vec<String>,
}

impl Page {
	pub fn new(lines: Vec<String>) -> Self {
		Self { lines }
	}

	pub fn lines(&self) -> &[String] {
		&self.lines
	}

	pub fn into_lines(self) -> Vec<String> {
		self.lines
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	/// Total length of all lines, in characters.
	pub fn char_count(&self) -> usize {
		self.lines.iter().map(|line| line.chars().count()).sum()
	}
}

/// One page rendered for the chat platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutgoingMessage {
	pub text: String,
	pub blocks: Vec<Block>,
}

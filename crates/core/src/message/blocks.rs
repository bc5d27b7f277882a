//! Page to Block Kit conversion.

use nvim_weekly_protocol::Block;

use crate::article::{EMPHASIS_MARKER, IMAGE_MARKER};
use crate::message::{IMAGE_ALT_TEXT, NOTIFICATION_TEXT, OutgoingMessage, Page};

/// Builds the message for one page: fallback text plus its blocks.
pub fn build_message(page: &Page) -> OutgoingMessage {
	OutgoingMessage {
		text: NOTIFICATION_TEXT.to_string(),
		blocks: build_blocks(page),
	}
}

/// Converts a page's lines into section and image blocks.
///
/// A section closes when a heading-looking line (starting and ending with
/// `*`) arrives after text, or when an image marker line arrives. Image
/// lines become their own image block. The trailing section is always
/// emitted, so every page yields at least one block.
pub fn build_blocks(page: &Page) -> Vec<Block> {
	let mut builder = BlockBuilder::default();
	for line in page.lines() {
		builder.push(line);
	}
	builder.finish()
}

#[derive(Default)]
struct BlockBuilder {
	blocks: Vec<Block>,
	section: Option<String>,
	sections: usize,
}

impl BlockBuilder {
	fn push(&mut self, line: &str) {
		if is_heading(line) && self.section.is_some() {
			self.close_section();
		}

		if line.contains(IMAGE_MARKER) {
			self.close_section();
			let url = extract_image_url(line).unwrap_or_default();
			self.blocks.push(Block::image(url, IMAGE_ALT_TEXT));
		} else {
			let section = self.section.get_or_insert_with(String::new);
			section.push_str(line);
			section.push('\n');
		}
	}

	fn close_section(&mut self) {
		self.sections += 1;
		let text = self.section.take().unwrap_or_else(|| EMPHASIS_MARKER.to_string());
		self.blocks.push(Block::section(format!("section{}", self.sections), text));
	}

	fn finish(mut self) -> Vec<Block> {
		self.close_section();
		self.blocks
	}
}

fn is_heading(line: &str) -> bool {
	line.starts_with(EMPHASIS_MARKER) && line.ends_with(EMPHASIS_MARKER)
}

/// Extracts the URL between the parentheses following the image marker.
pub fn extract_image_url(line: &str) -> Option<&str> {
	let start = line.find(IMAGE_MARKER)? + IMAGE_MARKER.len();
	let rest = &line[start..];
	let open = rest.find('(')? + 1;
	let rest = &rest[open..];
	let close = rest.rfind(')').unwrap_or(rest.len());
	Some(&rest[..close])
}

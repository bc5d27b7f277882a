//! Whole-document traversal.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::article::EMPHASIS_MARKER;
use crate::article::formatter::format_element;
use crate::article::inline::visible_text;
use crate::error::{Error, Result};

static TITLE_SELECTOR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("head > title").expect("TITLE_SELECTOR should parse"));

/// Parses raw HTML and formats the whole article.
pub fn parse_article(html: &str) -> Result<Vec<String>> {
	let document = Html::parse_document(html);
	document_lines(&document)
}

/// Formats a parsed document into ordered lines, title first.
///
/// Every element is visited in pre-order; the formatter decides which ones
/// contribute.
pub fn document_lines(document: &Html) -> Result<Vec<String>> {
	let mut lines = vec![title_line(document)?];
	for element in document.tree.root().descendants().filter_map(ElementRef::wrap) {
		lines.extend(format_element(element));
	}

	debug!(target = "weekly", lines = lines.len(), "parsed article");
	Ok(lines)
}

/// The `*=== title ===*` line opening every article.
pub fn title_line(document: &Html) -> Result<String> {
	let title = document.select(&TITLE_SELECTOR).next().ok_or(Error::MissingTitle)?;
	Ok(format!("{EMPHASIS_MARKER}=== {} ==={EMPHASIS_MARKER}", visible_text(title)))
}

//! Top-level tag formatting.

use scraper::ElementRef;

use crate::article::inline::{list_item_text, render_inline, visible_text};
use crate::article::kind::ElementKind;
use crate::article::{CONTENT_CLASS, EMPHASIS_MARKER, LINK_MARKER};

/// Formats one element into zero or more mrkdwn lines.
///
/// Only direct children of a `div` carrying the `content` class produce
/// output; everything else (navigation, headers, footers, nested markup)
/// yields nothing here and is picked up through its content-scoped
/// ancestor instead.
pub fn format_element(element: ElementRef<'_>) -> Vec<String> {
	if !in_content_scope(element) {
		return Vec::new();
	}

	match ElementKind::of(element) {
		ElementKind::Heading(level) => vec![format_heading(level, &visible_text(element))],
		ElementKind::Blockquote => vec![format_quote(&visible_text(element))],
		ElementKind::UnorderedList => element
			.children()
			.filter_map(ElementRef::wrap)
			.filter(|child| ElementKind::of(*child) == ElementKind::ListItem)
			.map(|item| format!("- _{}_\n", list_item_text(item)))
			.collect(),
		ElementKind::Paragraph => vec![format!("{}\n", render_inline(*element))],
		ElementKind::Anchor { href } => vec![format!("{LINK_MARKER} -> ({})\n", href.unwrap_or_default())],
		_ => Vec::new(),
	}
}

/// Returns `true` when the element's parent is a `div.content` container.
pub fn in_content_scope(element: ElementRef<'_>) -> bool {
	element
		.parent()
		.and_then(ElementRef::wrap)
		.is_some_and(|parent| parent.value().name() == "div" && parent.value().classes().any(|class| class == CONTENT_CLASS))
}

/// Wraps heading text in emphasis with `4 - level` dashes on each side.
pub(crate) fn format_heading(level: u8, text: &str) -> String {
	let rule = "-".repeat(4usize.saturating_sub(usize::from(level)));
	let text = text.replace('\n', "");
	format!("{EMPHASIS_MARKER}{rule} {text} {rule}{EMPHASIS_MARKER}\n")
}

fn format_quote(text: &str) -> String {
	format!("```\n{}\n```\n", text.replace('\n', " "))
}

//! Inline rendering for paragraph and list item content.

use ego_tree::NodeRef;
use scraper::{ElementRef, Node};

use crate::article::IMAGE_MARKER;
use crate::article::kind::ElementKind;

/// Renders a node as inline mrkdwn.
///
/// Text passes through unchanged. Elements without a dedicated rendering
/// fall back to their visible text.
pub fn render_inline(node: NodeRef<'_, Node>) -> String {
	match node.value() {
		Node::Text(text) => String::from(&**text),
		Node::Element(_) => ElementRef::wrap(node).map(render_inline_element).unwrap_or_default(),
		_ => String::new(),
	}
}

fn render_inline_element(element: ElementRef<'_>) -> String {
	match ElementKind::of(element) {
		ElementKind::Paragraph => element.children().map(render_inline).collect(),
		ElementKind::Anchor { href } => format!("<{}|{}>", href.unwrap_or_default(), visible_text(element)),
		ElementKind::Code => format!("`{}`", visible_text(element)),
		ElementKind::Preformatted => format!("```\n{}\n```", visible_text(element)),
		ElementKind::Image { src } => format!("{IMAGE_MARKER} -> ({})", src.unwrap_or_default()),
		_ => visible_text(element),
	}
}

/// Renders list-bearing content into its pieces, in order.
///
/// List items expand to the rendering of all their children. A nested
/// unordered list yields one `-\t _item_` piece per list item it contains.
/// Anything else renders inline as a single piece.
pub fn render_list_content(node: NodeRef<'_, Node>) -> Vec<String> {
	let Some(element) = ElementRef::wrap(node) else {
		return vec![render_inline(node)];
	};

	match ElementKind::of(element) {
		ElementKind::ListItem => element.children().flat_map(render_list_content).collect(),
		ElementKind::UnorderedList => element
			.descendants()
			.skip(1)
			.filter_map(ElementRef::wrap)
			.filter(|child| ElementKind::of(*child) == ElementKind::ListItem)
			.map(|item| format!("-\t _{}_\n", list_item_text(item)))
			.collect(),
		_ => vec![render_inline(node)],
	}
}

/// Rendered, trimmed text of a list item.
pub(crate) fn list_item_text(item: ElementRef<'_>) -> String {
	render_list_content(*item).concat().trim().to_string()
}

pub(crate) fn visible_text(element: ElementRef<'_>) -> String {
	element.text().collect()
}

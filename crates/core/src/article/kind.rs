//! Element classification.

use scraper::ElementRef;

/// Tag kinds the formatter distinguishes, with the attributes each needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind<'a> {
	/// `h1`..`h6`.
	Heading(u8),
	Paragraph,
	Anchor { href: Option<&'a str> },
	UnorderedList,
	ListItem,
	Code,
	Preformatted,
	Blockquote,
	Image { src: Option<&'a str> },
	Other,
}

impl<'a> ElementKind<'a> {
	pub fn of(element: ElementRef<'a>) -> Self {
		let value = element.value();
		match value.name() {
			"p" => ElementKind::Paragraph,
			"a" => ElementKind::Anchor { href: value.attr("href") },
			"ul" => ElementKind::UnorderedList,
			"li" => ElementKind::ListItem,
			"code" => ElementKind::Code,
			"pre" => ElementKind::Preformatted,
			"blockquote" => ElementKind::Blockquote,
			"img" => ElementKind::Image { src: value.attr("src") },
			name => heading_level(name).map_or(ElementKind::Other, ElementKind::Heading),
		}
	}
}

fn heading_level(name: &str) -> Option<u8> {
	let digits = name.strip_prefix('h')?;
	if digits.len() != 1 {
		return None;
	}
	digits.parse::<u8>().ok().filter(|level| (1..=6).contains(level))
}

//! HTML article to mrkdwn line conversion.
//!
//! The parsed document is a read-only view owned by the caller. Every
//! element is visited in document order and handed to the tag formatter,
//! which only produces output for direct children of a `div.content`
//! container. The result is an ordered list of formatted lines.

mod document;
mod formatter;
mod inline;
mod kind;

pub use document::{document_lines, parse_article, title_line};
pub use formatter::{format_element, in_content_scope};
pub use inline::{render_inline, render_list_content};
pub use kind::ElementKind;

/// Character wrapping headings and the article title.
pub const EMPHASIS_MARKER: char = '*';

/// Token prefixed to inline image markers.
pub const IMAGE_MARKER: &str = "[IMAGE]";

/// Token prefixed to standalone link lines.
pub const LINK_MARKER: &str = "[LINK]";

/// Class a parent `div` must carry for its children to be formatted.
pub const CONTENT_CLASS: &str = "content";

//! Newsletter-to-Slack conversion for the This Week in Neovim bot.
//!
//! The crate turns the HTML of the latest newsletter article into Slack
//! Block Kit messages. Data flows one way:
//!
//! ```text
//! raw HTML -> formatted lines -> pages -> blocks -> delivered messages
//! ```
//!
//! - [`article`] walks the parsed document and formats qualifying elements
//!   into mrkdwn lines.
//! - [`message`] packs lines into character-budgeted pages and turns each
//!   page into section and image blocks.
//! - [`delivery`] drives one complete run against the two external
//!   collaborators, [`ArticleSource`] and [`MessageSink`].

pub mod article;
pub mod delivery;
pub mod error;
pub mod message;

pub use article::{format_element, parse_article};
pub use delivery::{ArticleSource, Digest, DigestReport, MessageSink, deliver_pages, latest_url};
pub use error::{Error, Result};
pub use message::{OutgoingMessage, Page, build_blocks, build_message, paginate};
pub use nvim_weekly_protocol::Block;

//! Error types for the digest pipeline.

use thiserror::Error;

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures that can end a digest run.
#[derive(Error, Debug)]
pub enum Error {
	/// The article page could not be retrieved.
	#[error("Failed to fetch {url}: {message}")]
	Fetch { url: String, message: String },

	/// The document has no `<head><title>`.
	#[error("Article document has no title")]
	MissingTitle,

	/// The chat platform refused a message.
	#[error("Failed to deliver message to {channel}: {message}")]
	Delivery { channel: String, message: String },
}

impl Error {
	pub fn fetch(url: impl Into<String>, message: impl ToString) -> Self {
		Error::Fetch {
			url: url.into(),
			message: message.to_string(),
		}
	}

	pub fn delivery(channel: impl Into<String>, message: impl ToString) -> Self {
		Error::Delivery {
			channel: channel.into(),
			message: message.to_string(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn error_display() {
		let err = Error::fetch("https://example.org/latest", "connection refused");
		assert_eq!(err.to_string(), "Failed to fetch https://example.org/latest: connection refused");

		let err = Error::delivery("C1", "not_in_channel");
		assert_eq!(err.to_string(), "Failed to deliver message to C1: not_in_channel");

		assert_eq!(Error::MissingTitle.to_string(), "Article document has no title");
	}
}

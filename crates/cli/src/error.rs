//! Error types for the bot binary.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BotError>;

#[derive(Error, Debug)]
pub enum BotError {
	#[error(transparent)]
	Digest(#[from] weekly::Error),

	#[error("HTTP error: {0}")]
	Http(#[from] reqwest::Error),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	#[error("Invalid configuration: {0}")]
	Config(String),

	#[error("Request signature rejected: {0}")]
	Signature(&'static str),
}

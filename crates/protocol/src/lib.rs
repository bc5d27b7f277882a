//! Wire types for the Slack platform.
//!
//! This crate contains the serde-serializable types exchanged with Slack:
//! Block Kit blocks, Events API envelopes, and the `chat.postMessage`
//! request and response bodies.
//!
//! # Design Philosophy
//!
//! Types in this crate are:
//! * Pure data: No behavior beyond serialization/deserialization
//! * 1:1 with the wire: field names match Slack's JSON exactly
//! * Partial: only the fields the bot reads or writes are modelled
//!
//! Message assembly lives in `nvim-weekly-core`.

pub mod blocks;
pub mod chat;
pub mod events;

pub use blocks::*;
pub use chat::*;
pub use events::*;

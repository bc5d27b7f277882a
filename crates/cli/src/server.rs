//! Slack Events API endpoint.
//!
//! Requests are verified against the signing secret, then dispatched by
//! envelope type. Mentions are acknowledged at once and answered from a
//! detached task, so a slow digest run never delays the acknowledgement.

use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use nvim_weekly_protocol::{Envelope, Event};
use tracing::{debug, info, warn};

use crate::error::Result;
use crate::handler::MentionResponder;
use crate::signature::{SIGNATURE_HEADER, SignatureVerifier, TIMESTAMP_HEADER};

/// Path Slack posts events to.
pub const EVENTS_PATH: &str = "/slack/events";

#[derive(Clone)]
pub struct AppState {
	responder: Arc<dyn MentionResponder>,
	verifier: Option<SignatureVerifier>,
}

impl AppState {
	/// `verifier` of `None` accepts unsigned requests.
	pub fn new(responder: Arc<dyn MentionResponder>, verifier: Option<SignatureVerifier>) -> Self {
		Self { responder, verifier }
	}
}

pub fn router(state: AppState) -> Router {
	Router::new().route(EVENTS_PATH, post(events)).with_state(state)
}

/// Binds `0.0.0.0:port` and serves until the process exits.
pub async fn serve(state: AppState, port: u16) -> Result<()> {
	let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
	info!(target = "weekly", addr = %listener.local_addr()?, path = EVENTS_PATH, "listening for Slack events");
	axum::serve(listener, router(state)).await?;
	Ok(())
}

async fn events(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> Response {
	if let Some(verifier) = &state.verifier {
		let timestamp = header_str(&headers, TIMESTAMP_HEADER);
		let signature = header_str(&headers, SIGNATURE_HEADER);
		if let Err(err) = verifier.verify(timestamp, signature, &body, unix_now()) {
			warn!(target = "weekly", error = %err, "rejected event request");
			return StatusCode::UNAUTHORIZED.into_response();
		}
	}

	let envelope: Envelope = match serde_json::from_slice(&body) {
		Ok(envelope) => envelope,
		Err(err) => {
			warn!(target = "weekly", error = %err, "malformed event payload");
			return (StatusCode::BAD_REQUEST, err.to_string()).into_response();
		}
	};

	match envelope {
		Envelope::UrlVerification { challenge } => challenge.into_response(),
		Envelope::EventCallback {
			event: Event::AppMention(mention),
			event_id,
			..
		} => {
			info!(target = "weekly", channel = %mention.channel, event_id = event_id.as_deref().unwrap_or(""), "app mention");
			let responder = Arc::clone(&state.responder);
			tokio::spawn(async move {
				responder.respond(&mention.channel).await;
			});
			StatusCode::OK.into_response()
		}
		other => {
			debug!(target = "weekly", envelope = ?other, "ignored event");
			StatusCode::OK.into_response()
		}
	}
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
	headers.get(name).and_then(|value| value.to_str().ok())
}

fn unix_now() -> u64 {
	SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_secs()).unwrap_or_default()
}

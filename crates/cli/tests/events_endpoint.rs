//! Integration tests for the Slack Events API endpoint.
//!
//! Requests go straight into the router with `oneshot`; mentions are
//! captured by a responder that forwards the channel over an mpsc channel.

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use nvim_weekly_bot::handler::MentionResponder;
use nvim_weekly_bot::server::{AppState, EVENTS_PATH, router};
use nvim_weekly_bot::signature::{SIGNATURE_HEADER, SignatureVerifier, TIMESTAMP_HEADER};
use tokio::sync::mpsc;
use tower::ServiceExt;

const SECRET: &str = "test-signing-secret";

struct ForwardingResponder(mpsc::UnboundedSender<String>);

#[async_trait]
impl MentionResponder for ForwardingResponder {
	async fn respond(&self, channel: &str) {
		let _ = self.0.send(channel.to_string());
	}
}

fn app(verifier: Option<SignatureVerifier>) -> (Router, mpsc::UnboundedReceiver<String>) {
	let (tx, rx) = mpsc::unbounded_channel();
	let state = AppState::new(Arc::new(ForwardingResponder(tx)), verifier);
	(router(state), rx)
}

fn post(body: &str) -> Request<Body> {
	Request::post(EVENTS_PATH)
		.header("content-type", "application/json")
		.body(Body::from(body.to_string()))
		.unwrap()
}

fn signed_post(body: &str, timestamp: u64) -> Request<Body> {
	let timestamp = timestamp.to_string();
	let signature = SignatureVerifier::new(SECRET).sign(&timestamp, body.as_bytes()).unwrap();
	Request::post(EVENTS_PATH)
		.header("content-type", "application/json")
		.header(TIMESTAMP_HEADER, &timestamp)
		.header(SIGNATURE_HEADER, signature)
		.body(Body::from(body.to_string()))
		.unwrap()
}

fn now() -> u64 {
	SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_secs()
}

const MENTION: &str = r#"{"type":"event_callback","event_id":"Ev1","event":{"type":"app_mention","channel":"C0NEWS","user":"U1","text":"<@B1> news?","ts":"1700000000.000100"}}"#;

#[tokio::test]
async fn answers_url_verification_challenge() {
	let (app, _rx) = app(None);
	let response = app
		.oneshot(post(r#"{"type":"url_verification","token":"t","challenge":"3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P"}"#))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
	assert_eq!(&body[..], b"3eZbrw1aBm2rZgRNFdxV2595E9CY3gmdALWMmHkvFXO7tYXAYM8P");
}

#[tokio::test]
async fn mention_is_acknowledged_and_dispatched() {
	let (app, mut rx) = app(None);
	let response = app.oneshot(post(MENTION)).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let channel = tokio::time::timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
	assert_eq!(channel.as_deref(), Some("C0NEWS"));
}

#[tokio::test]
async fn other_events_are_ignored() {
	let (app, mut rx) = app(None);
	let response = app
		.oneshot(post(r#"{"type":"event_callback","event":{"type":"message","channel":"C1","text":"hi"}}"#))
		.await
		.unwrap();

	assert_eq!(response.status(), StatusCode::OK);
	tokio::task::yield_now().await;
	assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn malformed_payload_is_bad_request() {
	let (app, _rx) = app(None);
	let response = app.oneshot(post("{not json")).await.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signed_mention_is_accepted() {
	let (app, mut rx) = app(Some(SignatureVerifier::new(SECRET)));
	let response = app.oneshot(signed_post(MENTION, now())).await.unwrap();
	assert_eq!(response.status(), StatusCode::OK);

	let channel = tokio::time::timeout(Duration::from_secs(2), rx.recv()).await.unwrap();
	assert_eq!(channel.as_deref(), Some("C0NEWS"));
}

#[tokio::test]
async fn unsigned_request_is_rejected_when_secret_configured() {
	let (app, mut rx) = app(Some(SignatureVerifier::new(SECRET)));
	let response = app.oneshot(post(MENTION)).await.unwrap();
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	tokio::task::yield_now().await;
	assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn replayed_request_is_rejected() {
	let (app, _rx) = app(Some(SignatureVerifier::new(SECRET)));
	let response = app.oneshot(signed_post(MENTION, now() - 3600)).await.unwrap();
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

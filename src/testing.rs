//! In-memory transport used by unit tests.
use std::{
	collections::VecDeque,
	sync::{Arc, Mutex},
};

use http::{HeaderMap, Method};

use crate::{
	client::ScimClientError,
	transport::{HttpClient, HttpClientFactory},
};

/// Request as seen by [`MockTransport`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: Method,
	pub uri: String,
	pub headers: HeaderMap,
	pub body: Vec<u8>,
}

impl RecordedRequest {
	pub fn json(&self) -> serde_json::Value {
		serde_json::from_slice(&self.body).unwrap()
	}

	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers.get(name).map(|v| v.to_str().unwrap())
	}
}

#[derive(Debug, Default)]
struct State {
	responses: VecDeque<http::Response<Vec<u8>>>,
	requests: Vec<RecordedRequest>,
}

/// Replays queued responses and records every request it receives.
///
/// Clones share the same queue and log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
	state: Arc<Mutex<State>>,
}

impl MockTransport {
	pub fn push(&self, response: http::Response<Vec<u8>>) {
		self.state.lock().unwrap().responses.push_back(response);
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.state.lock().unwrap().requests.clone()
	}
}

impl HttpClient for MockTransport {
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, ScimClientError> {
		let (parts, body) = request.into_parts();
		let mut state = self.state.lock().unwrap();
		state.requests.push(RecordedRequest {
			method: parts.method,
			uri: parts.uri.to_string(),
			headers: parts.headers,
			body,
		});
		state
			.responses
			.pop_front()
			.ok_or_else(|| ScimClientError::transport("no response queued"))
	}
}

impl HttpClientFactory for MockTransport {
	type Client = Self;

	fn new_http_client(&self) -> Result<Self, ScimClientError> {
		Ok(self.clone())
	}
}

pub fn json_response(status: u16, body: serde_json::Value) -> http::Response<Vec<u8>> {
	http::Response::builder()
		.status(status)
		.header(http::header::CONTENT_TYPE, "application/json")
		.body(serde_json::to_vec(&body).unwrap())
		.unwrap()
}

pub fn empty_response(status: u16) -> http::Response<Vec<u8>> {
	http::Response::builder()
		.status(status)
		.body(Vec::new())
		.unwrap()
}

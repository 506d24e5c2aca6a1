//! HTTP transport layer: request construction, client abstraction and
//! response handling strategies.
use http::HeaderValue;

mod client;
mod request;
pub mod response;

pub use client::*;
pub use request::*;
pub use response::{
	ErrorDecoder, ErrorsEnvelopeDecoder, JsonDecoder, ResponseClassifier, StatusClassifier,
	SuccessDecoder,
};

/// `Content-Type: application/json` header value.
pub const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

//! Response classification and body decoding strategies.
use serde::Deserialize;

use crate::client::{ApiError, ScimClientError};

/// Decides whether a response is a failure.
pub trait ResponseClassifier: Send + Sync {
	fn is_error(&self, response: &http::Response<Vec<u8>>) -> bool;
}

impl<F> ResponseClassifier for F
where
	F: Fn(&http::Response<Vec<u8>>) -> bool + Send + Sync,
{
	fn is_error(&self, response: &http::Response<Vec<u8>>) -> bool {
		self(response)
	}
}

/// Default classifier: any status code `>= 400` is a failure.
#[derive(Debug, Default, Clone, Copy)]
pub struct StatusClassifier;

impl ResponseClassifier for StatusClassifier {
	fn is_error(&self, response: &http::Response<Vec<u8>>) -> bool {
		response.status().as_u16() >= 400
	}
}

/// Decodes the body of a successful response.
///
/// The returned JSON value is then converted into the operation's result
/// type. Operations that expect no result never call the decoder.
pub trait SuccessDecoder: Send + Sync {
	fn decode(&self, response: &http::Response<Vec<u8>>)
	-> Result<serde_json::Value, ScimClientError>;
}

impl<F> SuccessDecoder for F
where
	F: Fn(&http::Response<Vec<u8>>) -> Result<serde_json::Value, ScimClientError> + Send + Sync,
{
	fn decode(
		&self,
		response: &http::Response<Vec<u8>>,
	) -> Result<serde_json::Value, ScimClientError> {
		self(response)
	}
}

/// Default success decoder: the body is a JSON document.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonDecoder;

impl SuccessDecoder for JsonDecoder {
	fn decode(
		&self,
		response: &http::Response<Vec<u8>>,
	) -> Result<serde_json::Value, ScimClientError> {
		serde_json::from_slice(response.body()).map_err(ScimClientError::decode)
	}
}

/// Turns a failed response into an error.
///
/// A body that cannot be decoded must be reported as
/// [`ScimClientError::Decode`] rather than ignored.
pub trait ErrorDecoder: Send + Sync {
	fn decode_error(&self, response: &http::Response<Vec<u8>>) -> ScimClientError;
}

impl<F> ErrorDecoder for F
where
	F: Fn(&http::Response<Vec<u8>>) -> ScimClientError + Send + Sync,
{
	fn decode_error(&self, response: &http::Response<Vec<u8>>) -> ScimClientError {
		self(response)
	}
}

/// Default error decoder for `{"Errors": {"description": .., "code": ..}}`
/// bodies.
#[derive(Debug, Default, Clone, Copy)]
pub struct ErrorsEnvelopeDecoder;

#[derive(Deserialize)]
struct ErrorsEnvelope {
	#[serde(rename = "Errors", alias = "errors")]
	errors: ApiError,
}

impl ErrorDecoder for ErrorsEnvelopeDecoder {
	fn decode_error(&self, response: &http::Response<Vec<u8>>) -> ScimClientError {
		match serde_json::from_slice::<ErrorsEnvelope>(response.body()) {
			Ok(envelope) => ScimClientError::api(envelope.errors),
			Err(e) => ScimClientError::decode(format!(
				"invalid error response (status {}): {e}",
				response.status()
			)),
		}
	}
}

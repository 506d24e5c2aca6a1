use serde::{Deserialize, Serialize};

/// Error body returned by the SCIM API.
///
/// See: <https://api.slack.com/scim#errors>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, thiserror::Error)]
#[error("{description}")]
pub struct ApiError {
	pub description: String,
	pub code: i64,
}

impl ApiError {
	pub fn new(description: impl Into<String>, code: i64) -> Self {
		Self {
			description: description.into(),
			code,
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum ScimClientError {
	#[error("invalid argument: {0}")]
	Validation(String),

	#[error("unable to build request: {0}")]
	Request(String),

	#[error("unable to send request: {0}")]
	Transport(String),

	#[error(transparent)]
	Api(ApiError),

	#[error("unable to decode response: {0}")]
	Decode(String),
}

impl ScimClientError {
	pub fn validation(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::debug!("validation error: {msg}");
		Self::Validation(msg)
	}

	pub fn request(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("request error: {msg}");
		Self::Request(msg)
	}

	pub fn transport(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("transport error: {msg}");
		Self::Transport(msg)
	}

	pub fn api(error: ApiError) -> Self {
		log::warn!("API error {}: {}", error.code, error.description);
		Self::Api(error)
	}

	pub fn decode(e: impl ToString) -> Self {
		let msg = e.to_string();
		log::error!("decode error: {msg}");
		Self::Decode(msg)
	}
}

impl From<ApiError> for ScimClientError {
	fn from(value: ApiError) -> Self {
		Self::api(value)
	}
}

/// Failure of a resource operation.
///
/// Carries the head of the HTTP response (status, headers) whenever the
/// server answered, so callers can inspect the status code even when the
/// error itself is generic. The response is `None` when the call failed
/// before any response existed (validation, request construction or
/// transport failure).
#[derive(Debug, thiserror::Error)]
#[error("{error}")]
pub struct CallError {
	error: ScimClientError,
	response: Option<http::Response<()>>,
}

impl CallError {
	pub fn new(error: ScimClientError, response: Option<http::Response<()>>) -> Self {
		Self { error, response }
	}

	pub fn error(&self) -> &ScimClientError {
		&self.error
	}

	pub fn into_error(self) -> ScimClientError {
		self.error
	}

	pub fn response(&self) -> Option<&http::Response<()>> {
		self.response.as_ref()
	}

	pub fn status(&self) -> Option<http::StatusCode> {
		self.response.as_ref().map(http::Response::status)
	}

	/// Vendor error, if the server answered with a decodable error body.
	pub fn api_error(&self) -> Option<&ApiError> {
		match &self.error {
			ScimClientError::Api(e) => Some(e),
			_ => None,
		}
	}

	pub fn into_parts(self) -> (ScimClientError, Option<http::Response<()>>) {
		(self.error, self.response)
	}
}

impl From<ScimClientError> for CallError {
	fn from(error: ScimClientError) -> Self {
		Self::new(error, None)
	}
}

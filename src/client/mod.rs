//! SCIM API client, its configuration surface and error types.
use std::{fmt, sync::Arc};

use crate::{
	AccessToken, AccessTokenBuf,
	transport::{
		ErrorDecoder, ErrorsEnvelopeDecoder, HttpClientFactory, JsonDecoder, ResponseClassifier,
		StatusClassifier, SuccessDecoder,
	},
};

mod config;
mod dispatch;
mod error;

pub use config::*;
pub use error::*;

#[cfg(feature = "reqwest")]
use crate::transport::DefaultHttpClientFactory;

/// Default SCIM API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.slack.com/scim/v1";

/// SCIM API client.
///
/// A client is configured either by deriving copies with the `with_*`
/// methods, which leave the original untouched and share every other
/// setting, or by mutating it in place with the `set_*` methods. Share a
/// client between tasks only through the first style.
#[derive(Clone)]
pub struct Client<F> {
	endpoint: String,
	token: AccessTokenBuf,
	http_client_factory: F,
	classifier: Arc<dyn ResponseClassifier>,
	success_decoder: Arc<dyn SuccessDecoder>,
	error_decoder: Arc<dyn ErrorDecoder>,
}

#[cfg(feature = "reqwest")]
impl Client<DefaultHttpClientFactory> {
	/// Creates a client for [`DEFAULT_ENDPOINT`] using the default
	/// `reqwest` transport.
	pub fn new(token: AccessTokenBuf) -> Self {
		Self::with_transport(token, DefaultHttpClientFactory::default())
	}

	/// Creates a client from `config` using the default `reqwest` transport.
	pub fn from_config(config: ClientConfig) -> Self {
		config.into_client_with(DefaultHttpClientFactory::default())
	}
}

impl<F> Client<F>
where
	F: HttpClientFactory,
{
	/// Creates a client for [`DEFAULT_ENDPOINT`] sending requests through
	/// the clients produced by `http_client_factory`.
	pub fn with_transport(token: AccessTokenBuf, http_client_factory: F) -> Self {
		Self {
			endpoint: DEFAULT_ENDPOINT.to_owned(),
			token,
			http_client_factory,
			classifier: Arc::new(StatusClassifier),
			success_decoder: Arc::new(JsonDecoder),
			error_decoder: Arc::new(ErrorsEnvelopeDecoder),
		}
	}
}

impl<F> Client<F> {
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	pub fn token(&self) -> &AccessToken {
		&self.token
	}

	pub fn http_client_factory(&self) -> &F {
		&self.http_client_factory
	}

	/// Returns a copy of this client using `endpoint`.
	///
	/// An empty endpoint selects [`DEFAULT_ENDPOINT`].
	pub fn with_endpoint(&self, endpoint: impl Into<String>) -> Self
	where
		F: Clone,
	{
		let mut client = self.clone();
		client.set_endpoint(endpoint);
		client
	}

	pub fn with_token(&self, token: AccessTokenBuf) -> Self
	where
		F: Clone,
	{
		Self {
			token,
			..self.clone()
		}
	}

	/// Returns a copy of this client using another transport.
	pub fn with_http_client_factory<G>(&self, http_client_factory: G) -> Client<G>
	where
		G: HttpClientFactory,
	{
		Client {
			endpoint: self.endpoint.clone(),
			token: self.token.clone(),
			http_client_factory,
			classifier: self.classifier.clone(),
			success_decoder: self.success_decoder.clone(),
			error_decoder: self.error_decoder.clone(),
		}
	}

	pub fn with_response_classifier(&self, classifier: impl ResponseClassifier + 'static) -> Self
	where
		F: Clone,
	{
		Self {
			classifier: Arc::new(classifier),
			..self.clone()
		}
	}

	pub fn with_success_decoder(&self, decoder: impl SuccessDecoder + 'static) -> Self
	where
		F: Clone,
	{
		Self {
			success_decoder: Arc::new(decoder),
			..self.clone()
		}
	}

	pub fn with_error_decoder(&self, decoder: impl ErrorDecoder + 'static) -> Self
	where
		F: Clone,
	{
		Self {
			error_decoder: Arc::new(decoder),
			..self.clone()
		}
	}

	/// Sets the endpoint. An empty endpoint selects [`DEFAULT_ENDPOINT`].
	pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
		let endpoint = endpoint.into();
		self.endpoint = if endpoint.is_empty() {
			DEFAULT_ENDPOINT.to_owned()
		} else {
			endpoint
		};
	}

	pub fn set_token(&mut self, token: AccessTokenBuf) {
		self.token = token;
	}

	pub fn set_http_client_factory(&mut self, http_client_factory: F) {
		self.http_client_factory = http_client_factory;
	}

	pub fn set_response_classifier(&mut self, classifier: impl ResponseClassifier + 'static) {
		self.classifier = Arc::new(classifier);
	}

	pub fn set_success_decoder(&mut self, decoder: impl SuccessDecoder + 'static) {
		self.success_decoder = Arc::new(decoder);
	}

	pub fn set_error_decoder(&mut self, decoder: impl ErrorDecoder + 'static) {
		self.error_decoder = Arc::new(decoder);
	}
}

impl<F: fmt::Debug> fmt::Debug for Client<F> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Client")
			.field("endpoint", &self.endpoint)
			.field("token", &"<redacted>")
			.field("http_client_factory", &self.http_client_factory)
			.finish_non_exhaustive()
	}
}

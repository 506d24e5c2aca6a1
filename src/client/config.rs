use std::fmt;

use serde::Deserialize;

use crate::{AccessTokenBuf, transport::HttpClientFactory};

use super::{Client, DEFAULT_ENDPOINT};

/// Client settings, deserializable from any `serde` format.
///
/// ```
/// # use scim_client::ClientConfig;
/// let config: ClientConfig = serde_json::from_str(r#"{
///     "token": "xoxp-1234",
///     "endpoint": "https://api.slack.com/scim/v1"
/// }"#).unwrap();
/// ```
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
	pub token: AccessTokenBuf,

	#[serde(default = "default_endpoint")]
	pub endpoint: String,
}

fn default_endpoint() -> String {
	DEFAULT_ENDPOINT.to_owned()
}

impl ClientConfig {
	pub fn new(token: AccessTokenBuf) -> Self {
		Self {
			token,
			endpoint: default_endpoint(),
		}
	}

	/// Builds a client using the default `reqwest` transport.
	#[cfg(feature = "reqwest")]
	pub fn into_client(self) -> Client<crate::transport::DefaultHttpClientFactory> {
		Client::from_config(self)
	}

	pub fn into_client_with<F>(self, http_client_factory: F) -> Client<F>
	where
		F: HttpClientFactory,
	{
		let mut client = Client::with_transport(self.token, http_client_factory);
		client.set_endpoint(self.endpoint);
		client
	}
}

impl fmt::Debug for ClientConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ClientConfig")
			.field("token", &"<redacted>")
			.field("endpoint", &self.endpoint)
			.finish()
	}
}

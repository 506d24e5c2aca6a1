use crate::client::ScimClientError;

use super::{HttpClient, HttpClientFactory};

impl HttpClient for reqwest::Client {
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, ScimClientError> {
		log::debug!("HTTP {} request to: {}", request.method(), request.uri());
		log::trace!("HTTP request: {request:?}");

		let response = self
			.execute(request.try_into().map_err(ScimClientError::request)?)
			.await
			.map_err(ScimClientError::transport)?;

		let mut builder = http::Response::builder().status(response.status());

		#[cfg(not(target_arch = "wasm32"))]
		{
			builder = builder.version(response.version());
		}

		for (name, value) in response.headers().iter() {
			builder = builder.header(name, value);
		}

		let response = builder
			.body(
				response
					.bytes()
					.await
					.map_err(ScimClientError::transport)?
					.to_vec(),
			)
			.map_err(ScimClientError::transport)?;

		log::trace!("HTTP response: {response:?}");

		Ok(response)
	}
}

/// Default transport: a standard, unconfigured [`reqwest::Client`].
///
/// The underlying connection pool is shared by every client handed out by
/// the factory.
#[derive(Debug, Clone, Default)]
pub struct DefaultHttpClientFactory {
	client: reqwest::Client,
}

impl DefaultHttpClientFactory {
	pub fn new() -> Self {
		Self::default()
	}
}

impl From<reqwest::Client> for DefaultHttpClientFactory {
	fn from(client: reqwest::Client) -> Self {
		Self { client }
	}
}

impl HttpClientFactory for DefaultHttpClientFactory {
	type Client = reqwest::Client;

	fn new_http_client(&self) -> Result<reqwest::Client, ScimClientError> {
		Ok(self.client.clone())
	}
}

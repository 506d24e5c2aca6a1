use crate::client::ScimClientError;

#[cfg(feature = "reqwest")]
mod reqwest;

#[cfg(feature = "reqwest")]
pub use reqwest::*;

/// Executes a single HTTP request.
///
/// Implementations must return the whole response body; dropping the
/// returned future cancels the request.
pub trait HttpClient {
	#[allow(async_fn_in_trait)]
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, ScimClientError>;
}

impl<T> HttpClient for &T
where
	T: HttpClient,
{
	async fn send(
		&self,
		request: http::Request<Vec<u8>>,
	) -> Result<http::Response<Vec<u8>>, ScimClientError> {
		T::send(*self, request).await
	}
}

/// Produces the [`HttpClient`] used for one call.
///
/// The factory is invoked once per operation. It may fail, for instance
/// when it performs authentication setup, in which case the error is
/// returned to the caller unchanged.
pub trait HttpClientFactory {
	type Client: HttpClient;

	fn new_http_client(&self) -> Result<Self::Client, ScimClientError>;
}

impl<F, C> HttpClientFactory for F
where
	F: Fn() -> Result<C, ScimClientError>,
	C: HttpClient,
{
	type Client = C;

	fn new_http_client(&self) -> Result<C, ScimClientError> {
		self()
	}
}

use http::Method;
use serde::{Serialize, de::DeserializeOwned};

use crate::{
	transport::{HttpClient, HttpClientFactory, build_request},
	util::Query,
};

use super::{CallError, Client, ScimClientError};

impl<F> Client<F>
where
	F: HttpClientFactory,
{
	/// Builds and sends a request, returning the raw response.
	///
	/// This is the raw counterpart of every resource operation: `path` lists
	/// the segments appended to the endpoint, e.g. `&["Users", id]` for
	/// [`Client::get_user`], so callers repeat the resource path themselves.
	///
	/// The response is not classified nor decoded; see
	/// [`Client::decode_response`] and [`Client::check_response`].
	pub async fn request<B>(
		&self,
		method: Method,
		path: &[&str],
		body: Option<&B>,
		query: &Query,
	) -> Result<http::Response<Vec<u8>>, ScimClientError>
	where
		B: Serialize + ?Sized,
	{
		let request = build_request(&self.endpoint, &self.token, method, path, body, query)?;
		let http_client = self.http_client_factory.new_http_client()?;
		let response = http_client.send(request).await?;
		log::debug!("SCIM response status: {}", response.status());
		Ok(response)
	}

	pub(crate) async fn call<T, B>(
		&self,
		method: Method,
		path: &[&str],
		body: Option<&B>,
		query: &Query,
	) -> Result<http::Response<T>, CallError>
	where
		T: DeserializeOwned,
		B: Serialize + ?Sized,
	{
		let response = self.request(method, path, body, query).await?;
		self.decode_response(response)
	}

	pub(crate) async fn call_without_content<B>(
		&self,
		method: Method,
		path: &[&str],
		body: Option<&B>,
	) -> Result<http::Response<()>, CallError>
	where
		B: Serialize + ?Sized,
	{
		let response = self.request(method, path, body, &Query::new()).await?;
		self.check_response(response)
	}
}

impl<F> Client<F> {
	/// Classifies `response` and decodes its body into `T`.
	///
	/// The body is consumed in every case. On failure the returned error
	/// keeps the response head.
	pub fn decode_response<T>(
		&self,
		response: http::Response<Vec<u8>>,
	) -> Result<http::Response<T>, CallError>
	where
		T: DeserializeOwned,
	{
		if self.classifier.is_error(&response) {
			return Err(self.failure(response));
		}

		let decoded = self.success_decoder.decode(&response).and_then(|value| {
			serde_json::from_value(value).map_err(ScimClientError::decode)
		});

		let (parts, _) = response.into_parts();
		match decoded {
			Ok(value) => Ok(http::Response::from_parts(parts, value)),
			Err(e) => Err(CallError::new(e, Some(http::Response::from_parts(parts, ())))),
		}
	}

	/// Classifies `response` without decoding a successful body.
	pub fn check_response(
		&self,
		response: http::Response<Vec<u8>>,
	) -> Result<http::Response<()>, CallError> {
		if self.classifier.is_error(&response) {
			Err(self.failure(response))
		} else {
			Ok(response.map(|_| ()))
		}
	}

	fn failure(&self, response: http::Response<Vec<u8>>) -> CallError {
		let error = self.error_decoder.decode_error(&response);
		CallError::new(error, Some(response.map(|_| ())))
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use crate::{
		ApiError, access_token,
		testing::{MockTransport, json_response},
	};

	use super::*;

	fn client(transport: &MockTransport) -> Client<MockTransport> {
		Client::with_transport(access_token!("xoxp-1").to_owned(), transport.clone())
	}

	#[tokio::test]
	async fn decodes_success() {
		let transport = MockTransport::default();
		transport.push(json_response(200, json!({ "value": 42 })));

		let response = client(&transport)
			.call::<serde_json::Value, ()>(Method::GET, &["Users"], None, &Query::new())
			.await
			.unwrap();

		assert_eq!(response.status(), 200);
		assert_eq!(response.body(), &json!({ "value": 42 }));

		let requests = transport.requests();
		assert_eq!(requests.len(), 1);
		assert_eq!(requests[0].uri, "https://api.slack.com/scim/v1/Users");
	}

	#[tokio::test]
	async fn decodes_api_error() {
		let transport = MockTransport::default();
		transport.push(json_response(
			401,
			json!({ "Errors": { "description": "invalid_authentication", "code": 401 } }),
		));

		let error = client(&transport)
			.call::<serde_json::Value, ()>(Method::GET, &["Users"], None, &Query::new())
			.await
			.unwrap_err();

		assert_eq!(error.status(), Some(http::StatusCode::UNAUTHORIZED));
		assert_eq!(
			error.api_error(),
			Some(&ApiError::new("invalid_authentication", 401))
		);
		assert_eq!(error.to_string(), "invalid_authentication");
	}

	#[tokio::test]
	async fn malformed_success_body_is_decode_error() {
		let transport = MockTransport::default();
		transport.push(
			http::Response::builder()
				.status(200)
				.body(b"not json".to_vec())
				.unwrap(),
		);

		let error = client(&transport)
			.call::<serde_json::Value, ()>(Method::GET, &["Users"], None, &Query::new())
			.await
			.unwrap_err();

		assert!(matches!(error.error(), ScimClientError::Decode(_)));
		assert_eq!(error.status(), Some(http::StatusCode::OK));
	}

	#[tokio::test]
	async fn mismatched_success_body_is_decode_error() {
		let transport = MockTransport::default();
		transport.push(json_response(200, json!({ "schema": 0 })));

		let error = client(&transport)
			.call::<crate::Schema, ()>(Method::GET, &["Schemas", "Users"], None, &Query::new())
			.await
			.unwrap_err();

		assert!(matches!(error.error(), ScimClientError::Decode(_)));
		assert!(error.response().is_some());
	}

	#[tokio::test]
	async fn malformed_error_body_is_decode_error() {
		let transport = MockTransport::default();
		transport.push(
			http::Response::builder()
				.status(502)
				.body(b"<html>Bad Gateway</html>".to_vec())
				.unwrap(),
		);

		let error = client(&transport)
			.call_without_content::<()>(Method::DELETE, &["Users", "U1"], None)
			.await
			.unwrap_err();

		assert!(matches!(error.error(), ScimClientError::Decode(_)));
		assert_eq!(error.status(), Some(http::StatusCode::BAD_GATEWAY));
	}

	#[tokio::test]
	async fn without_content_skips_success_decoder() {
		let transport = MockTransport::default();
		transport.push(http::Response::builder().status(204).body(Vec::new()).unwrap());

		let client = client(&transport).with_success_decoder(
			|_: &http::Response<Vec<u8>>| -> Result<serde_json::Value, ScimClientError> {
				Err(ScimClientError::decode("must not be called"))
			},
		);

		let response = client
			.call_without_content::<()>(Method::DELETE, &["Users", "U1"], None)
			.await
			.unwrap();
		assert_eq!(response.status(), 204);
	}

	#[tokio::test]
	async fn factory_failure_propagates() {
		let client = Client::with_transport(access_token!("xoxp-1").to_owned(), || {
			Err::<MockTransport, _>(ScimClientError::transport("no credentials"))
		});

		let error = client
			.call::<serde_json::Value, ()>(Method::GET, &["Users"], None, &Query::new())
			.await
			.unwrap_err();

		assert!(
			matches!(error.error(), ScimClientError::Transport(msg) if msg == "no credentials")
		);
		assert!(error.response().is_none());
	}

	#[tokio::test]
	async fn invalid_endpoint_never_reaches_transport() {
		let transport = MockTransport::default();
		let client = client(&transport).with_endpoint("::not a url::");

		let error = client
			.call::<serde_json::Value, ()>(Method::GET, &["Users"], None, &Query::new())
			.await
			.unwrap_err();

		assert!(matches!(error.error(), ScimClientError::Request(_)));
		assert!(error.response().is_none());
		assert!(transport.requests().is_empty());
	}

	#[tokio::test]
	async fn custom_classifier_and_error_decoder() {
		let transport = MockTransport::default();
		transport.push(json_response(200, json!({ "ok": false, "error": "ratelimited" })));

		let client = client(&transport)
			.with_response_classifier(|r: &http::Response<Vec<u8>>| {
				serde_json::from_slice::<serde_json::Value>(r.body())
					.map(|v| v["ok"] == json!(false))
					.unwrap_or(true)
			})
			.with_error_decoder(|r: &http::Response<Vec<u8>>| {
				match serde_json::from_slice::<serde_json::Value>(r.body()) {
					Ok(v) => ScimClientError::api(ApiError::new(
						v["error"].as_str().unwrap_or_default(),
						i64::from(r.status().as_u16()),
					)),
					Err(e) => ScimClientError::decode(e),
				}
			});

		let error = client
			.call::<serde_json::Value, ()>(Method::GET, &["Users"], None, &Query::new())
			.await
			.unwrap_err();

		assert_eq!(error.api_error(), Some(&ApiError::new("ratelimited", 200)));
		assert_eq!(error.status(), Some(http::StatusCode::OK));
	}

	#[tokio::test]
	async fn raw_request_returns_unclassified_response() {
		let transport = MockTransport::default();
		transport.push(json_response(
			404,
			json!({ "Errors": { "description": "not_found", "code": 404 } }),
		));

		let client = client(&transport);
		let response = client
			.request::<()>(Method::GET, &["Users", "U1"], None, &Query::new())
			.await
			.unwrap();
		assert_eq!(response.status(), 404);

		let error = client.check_response(response).unwrap_err();
		assert_eq!(error.api_error().map(|e| e.code), Some(404));
	}
}

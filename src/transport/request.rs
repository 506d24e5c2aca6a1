use http::{Method, header};
use serde::Serialize;
use url::Url;

use crate::{AccessToken, client::ScimClientError, util::Query};

use super::APPLICATION_JSON;

/// Builds an authenticated JSON request against the API.
///
/// `path` segments are appended to the path of `endpoint`, so an endpoint
/// with a sub-path such as `https://api.slack.com/scim/v1` keeps it. Each
/// segment is percent-encoded on its own: a `/` inside an identifier never
/// creates a new path segment.
///
/// The request is not sent.
pub fn build_request<B>(
	endpoint: &str,
	token: &AccessToken,
	method: Method,
	path: &[&str],
	body: Option<&B>,
	query: &Query,
) -> Result<http::Request<Vec<u8>>, ScimClientError>
where
	B: Serialize + ?Sized,
{
	let url = resolve_url(endpoint, path, query)?;

	let body = match body {
		Some(body) => serde_json::to_vec(body).map_err(ScimClientError::request)?,
		None => Vec::new(),
	};

	http::Request::builder()
		.method(method)
		.uri(url.as_str())
		.header(header::AUTHORIZATION, token.to_bearer_header()?)
		.header(header::CONTENT_TYPE, APPLICATION_JSON)
		.body(body)
		.map_err(ScimClientError::request)
}

fn resolve_url(endpoint: &str, path: &[&str], query: &Query) -> Result<Url, ScimClientError> {
	let mut url = Url::parse(endpoint)
		.map_err(|e| ScimClientError::request(format!("invalid endpoint `{endpoint}`: {e}")))?;

	url.path_segments_mut()
		.map_err(|()| ScimClientError::request(format!("endpoint `{endpoint}` cannot be a base")))?
		.pop_if_empty()
		.extend(path);

	let query = query.encode()?;
	url.set_query((!query.is_empty()).then_some(query.as_str()));

	Ok(url)
}

#[cfg(test)]
mod tests {
	use crate::{access_token, util::Pagination};

	use super::*;

	const ENDPOINT: &str = "https://api.slack.com/scim/v1";

	#[test]
	fn joins_endpoint_sub_path() {
		let url = resolve_url(ENDPOINT, &["Users"], &Query::new()).unwrap();
		assert_eq!(url.as_str(), "https://api.slack.com/scim/v1/Users");

		let url = resolve_url("https://api.slack.com/scim/v1/", &["Users", "U1"], &Query::new())
			.unwrap();
		assert_eq!(url.as_str(), "https://api.slack.com/scim/v1/Users/U1");

		let url = resolve_url("https://example.com", &["Groups"], &Query::new()).unwrap();
		assert_eq!(url.as_str(), "https://example.com/Groups");
	}

	#[test]
	fn encodes_path_segments() {
		let url = resolve_url(ENDPOINT, &["Users", "a/b c"], &Query::new()).unwrap();
		assert_eq!(url.as_str(), "https://api.slack.com/scim/v1/Users/a%2Fb%20c");
	}

	#[test]
	fn replaces_endpoint_query() {
		let url = resolve_url("https://example.com/scim?x=1", &["Users"], &Query::new()).unwrap();
		assert_eq!(url.as_str(), "https://example.com/scim/Users");

		let mut query = Query::new();
		query.set_page(Some(&Pagination::new(10, 5)));
		let url = resolve_url(ENDPOINT, &["Users"], &query).unwrap();
		assert_eq!(url.query(), Some("count=10&startIndex=5"));
	}

	#[test]
	fn rejects_invalid_endpoint() {
		let result = build_request(
			"not a url",
			access_token!("token"),
			Method::GET,
			&["Users"],
			None::<&()>,
			&Query::new(),
		);
		assert!(matches!(result, Err(ScimClientError::Request(_))));

		let result = build_request(
			"mailto:admin@example.com",
			access_token!("token"),
			Method::GET,
			&["Users"],
			None::<&()>,
			&Query::new(),
		);
		assert!(matches!(result, Err(ScimClientError::Request(_))));
	}

	#[test]
	fn sets_headers_and_body() {
		let request = build_request(
			ENDPOINT,
			access_token!("xoxp-1"),
			Method::POST,
			&["Groups"],
			Some(&serde_json::json!({ "displayName": "Admins" })),
			&Query::new(),
		)
		.unwrap();

		assert_eq!(request.method(), Method::POST);
		assert_eq!(request.uri(), "https://api.slack.com/scim/v1/Groups");
		assert_eq!(request.headers()[header::AUTHORIZATION], "Bearer xoxp-1");
		assert_eq!(request.headers()[header::CONTENT_TYPE], "application/json");

		let body: serde_json::Value = serde_json::from_slice(request.body()).unwrap();
		assert_eq!(body, serde_json::json!({ "displayName": "Admins" }));
	}

	#[test]
	fn empty_body_without_payload() {
		let request = build_request(
			ENDPOINT,
			access_token!("xoxp-1"),
			Method::DELETE,
			&["Users", "U1"],
			None::<&()>,
			&Query::new(),
		)
		.unwrap();

		assert!(request.body().is_empty());
		assert_eq!(request.headers()[header::CONTENT_TYPE], "application/json");
	}
}

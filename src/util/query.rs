use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::client::ScimClientError;

/// Page selection for list operations.
///
/// A zero value means "unset": the corresponding query parameter is not
/// sent and the server applies its own default.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
	/// Maximum number of resources per page.
	pub count: u32,

	/// 1-based index of the first resource of the page.
	pub start_index: u32,
}

impl Pagination {
	pub fn new(count: u32, start_index: u32) -> Self {
		Self { count, start_index }
	}
}

/// Query parameters accepted by the list endpoints.
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Query {
	/// Filter expression, passed through as-is.
	pub filter: Option<String>,

	pub count: Option<u32>,

	#[serde(rename = "startIndex")]
	pub start_index: Option<u32>,
}

impl Query {
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the filter expression. An empty filter is ignored.
	pub fn with_filter(self, filter: Option<&str>) -> Self {
		Self {
			filter: filter.filter(|f| !f.is_empty()).map(ToOwned::to_owned),
			..self
		}
	}

	/// Adds the non-zero fields of `page`. Does nothing if `page` is `None`.
	pub fn set_page(&mut self, page: Option<&Pagination>) {
		let Some(page) = page else {
			return;
		};

		if page.count != 0 {
			self.count = Some(page.count);
		}

		if page.start_index != 0 {
			self.start_index = Some(page.start_index);
		}
	}

	pub fn with_page(mut self, page: Option<&Pagination>) -> Self {
		self.set_page(page);
		self
	}

	pub fn is_empty(&self) -> bool {
		self.filter.is_none() && self.count.is_none() && self.start_index.is_none()
	}

	/// Encodes the parameters as `application/x-www-form-urlencoded`.
	pub fn encode(&self) -> Result<String, ScimClientError> {
		serde_html_form::to_string(self).map_err(ScimClientError::request)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn zero_pagination_is_omitted() {
		let query = Query::new().with_page(Some(&Pagination::default()));
		assert!(query.is_empty());
		assert_eq!(query.encode().unwrap(), "");
	}

	#[test]
	fn no_pagination_is_noop() {
		let query = Query::new().with_page(None);
		assert_eq!(query, Query::new());
	}

	#[test]
	fn pagination_fields() {
		let query = Query::new().with_page(Some(&Pagination::new(10, 3)));
		assert_eq!(query.encode().unwrap(), "count=10&startIndex=3");

		let query = Query::new().with_page(Some(&Pagination::new(10, 0)));
		assert_eq!(query.encode().unwrap(), "count=10");

		let query = Query::new().with_page(Some(&Pagination::new(0, 7)));
		assert_eq!(query.encode().unwrap(), "startIndex=7");
	}

	#[test]
	fn filter_is_form_encoded() {
		let query = Query::new()
			.with_filter(Some("userName eq \"a&b\""))
			.with_page(Some(&Pagination::new(1, 0)));
		assert_eq!(
			query.encode().unwrap(),
			"filter=userName+eq+%22a%26b%22&count=1"
		);
	}

	#[test]
	fn empty_filter_is_ignored() {
		assert!(Query::new().with_filter(Some("")).is_empty());
		assert!(Query::new().with_filter(None).is_empty());
	}
}

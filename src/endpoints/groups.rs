use http::Method;

use crate::{
	CallError, Client,
	resources::{Group, Groups},
	transport::HttpClientFactory,
	util::{Pagination, Query},
};

use super::require_id;

const GROUPS: &str = "Groups";

/// Group operations.
///
/// See: <https://api.slack.com/scim#groups>
impl<F> Client<F>
where
	F: HttpClientFactory,
{
	/// Lists groups, optionally paginated and filtered.
	pub async fn list_groups(
		&self,
		page: Option<&Pagination>,
		filter: Option<&str>,
	) -> Result<http::Response<Groups>, CallError> {
		let query = Query::new().with_page(page).with_filter(filter);
		self.call::<_, ()>(Method::GET, &[GROUPS], None, &query)
			.await
	}

	pub async fn get_group(&self, id: &str) -> Result<http::Response<Group>, CallError> {
		let id = require_id(id)?;
		self.call::<_, ()>(Method::GET, &[GROUPS, id], None, &Query::new())
			.await
	}

	pub async fn create_group(&self, group: &Group) -> Result<http::Response<Group>, CallError> {
		self.call(Method::POST, &[GROUPS], Some(group), &Query::new())
			.await
	}

	/// Replaces the group identified by `id`.
	pub async fn put_group(
		&self,
		id: &str,
		group: &Group,
	) -> Result<http::Response<Group>, CallError> {
		let id = require_id(id)?;
		self.call(Method::PUT, &[GROUPS, id], Some(group), &Query::new())
			.await
	}

	/// Updates the group identified by `id`.
	///
	/// The API answers with no content.
	pub async fn patch_group(
		&self,
		id: &str,
		group: &Group,
	) -> Result<http::Response<()>, CallError> {
		let id = require_id(id)?;
		self.call_without_content(Method::PATCH, &[GROUPS, id], Some(group))
			.await
	}

	pub async fn delete_group(&self, id: &str) -> Result<http::Response<()>, CallError> {
		let id = require_id(id)?;
		self.call_without_content::<()>(Method::DELETE, &[GROUPS, id], None)
			.await
	}
}

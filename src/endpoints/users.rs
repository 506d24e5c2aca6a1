use http::Method;

use crate::{
	CallError, Client,
	resources::{User, UserPatch, Users},
	transport::HttpClientFactory,
	util::{Pagination, Query},
};

use super::require_id;

const USERS: &str = "Users";

/// User operations.
///
/// See: <https://api.slack.com/scim#users>
impl<F> Client<F>
where
	F: HttpClientFactory,
{
	/// Lists users, optionally paginated and filtered.
	///
	/// The filter expression is sent as is, e.g. `userName eq "jane"`.
	pub async fn list_users(
		&self,
		page: Option<&Pagination>,
		filter: Option<&str>,
	) -> Result<http::Response<Users>, CallError> {
		let query = Query::new().with_page(page).with_filter(filter);
		self.call::<_, ()>(Method::GET, &[USERS], None, &query)
			.await
	}

	pub async fn get_user(&self, id: &str) -> Result<http::Response<User>, CallError> {
		let id = require_id(id)?;
		self.call::<_, ()>(Method::GET, &[USERS, id], None, &Query::new())
			.await
	}

	pub async fn create_user(&self, user: &User) -> Result<http::Response<User>, CallError> {
		self.call(Method::POST, &[USERS], Some(user), &Query::new())
			.await
	}

	/// Replaces the user identified by `id`.
	pub async fn put_user(&self, id: &str, user: &User) -> Result<http::Response<User>, CallError> {
		let id = require_id(id)?;
		self.call(Method::PUT, &[USERS, id], Some(user), &Query::new())
			.await
	}

	/// Updates the fields of the user identified by `id` that `patch` sets.
	pub async fn patch_user(
		&self,
		id: &str,
		patch: &UserPatch,
	) -> Result<http::Response<User>, CallError> {
		let id = require_id(id)?;
		self.call(Method::PATCH, &[USERS, id], Some(patch), &Query::new())
			.await
	}

	pub async fn delete_user(&self, id: &str) -> Result<http::Response<()>, CallError> {
		let id = require_id(id)?;
		self.call_without_content::<()>(Method::DELETE, &[USERS, id], None)
			.await
	}
}

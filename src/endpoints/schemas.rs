use http::Method;

use crate::{
	CallError, Client, resources::Schema, transport::HttpClientFactory, util::Query,
};

const SCHEMAS: &str = "Schemas";

/// Schema discovery.
///
/// See: <https://api.slack.com/scim#schemas>
impl<F> Client<F>
where
	F: HttpClientFactory,
{
	/// Schema of the user resource.
	pub async fn user_schema(&self) -> Result<http::Response<Schema>, CallError> {
		self.call::<_, ()>(Method::GET, &[SCHEMAS, "Users"], None, &Query::new())
			.await
	}

	/// Schema of the group resource.
	pub async fn group_schema(&self) -> Result<http::Response<Schema>, CallError> {
		self.call::<_, ()>(Method::GET, &[SCHEMAS, "Groups"], None, &Query::new())
			.await
	}
}

use http::Method;

use crate::{
	CallError, Client, resources::ServiceProviderConfig, transport::HttpClientFactory,
	util::Query,
};

impl<F> Client<F>
where
	F: HttpClientFactory,
{
	/// Operations and features supported by the API.
	///
	/// See: <https://api.slack.com/scim#service_provider_configuration>
	pub async fn service_provider_config(
		&self,
	) -> Result<http::Response<ServiceProviderConfig>, CallError> {
		self.call::<_, ()>(
			Method::GET,
			&["ServiceProviderConfigs"],
			None,
			&Query::new(),
		)
		.await
	}
}

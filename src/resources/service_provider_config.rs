//! Service provider configuration.
//!
//! See: <https://api.slack.com/scim#service_provider_configuration> and
//! <http://www.simplecloud.info/specs/draft-scim-core-schema-01.html#rfc.section.9>
use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

/// Operations and features supported by the API.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ServiceProviderConfig {
	#[serde_as(deserialize_as = "DefaultOnNull")]
	pub authentication_schemes: Vec<AuthenticationScheme>,

	pub patch: Option<Supported>,

	pub bulk: Option<BulkConfig>,

	pub filter: Option<FilterConfig>,

	pub change_password: Option<Supported>,

	pub sort: Option<Supported>,

	pub etag: Option<Supported>,

	pub xml_data_format: Option<Supported>,
}

impl ServiceProviderConfig {
	pub fn supports_patch(&self) -> bool {
		self.patch.is_some_and(|p| p.supported)
	}

	pub fn supports_bulk(&self) -> bool {
		self.bulk.as_ref().is_some_and(|b| b.supported)
	}

	pub fn supports_filter(&self) -> bool {
		self.filter.as_ref().is_some_and(|f| f.supported)
	}
}

/// Supported authentication scheme.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AuthenticationScheme {
	pub primary: bool,

	pub r#type: String,

	pub name: String,

	pub description: String,

	pub spec_url: String,
}

/// Feature flag of the patch, change password, sort, etag and XML data
/// format capabilities.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Supported {
	pub supported: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BulkConfig {
	pub supported: bool,

	pub max_operations: u64,

	/// Spelled `maxPlayloadSize` by the API.
	#[serde(rename = "maxPlayloadSize", alias = "maxPayloadSize")]
	pub max_payload_size: u64,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterConfig {
	pub supported: bool,

	pub max_results: u64,
}

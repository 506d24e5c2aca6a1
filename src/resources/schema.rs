use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

use crate::util::codec;

/// Resource schema, as returned by `GET /Schemas/{resource}`.
#[serde_as]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Schema {
	pub id: String,

	pub name: String,

	pub description: String,

	/// Schema URIs. The API may send a single string instead of a list.
	#[serde(deserialize_with = "codec::schema_ids::deserialize")]
	pub schema: Vec<String>,

	/// Path of the resource endpoint, e.g. `/Users`.
	pub endpoint: String,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	pub attributes: Vec<Attribute>,
}

/// Attribute definition of a [`Schema`].
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Attribute {
	pub multi_valued: bool,

	pub read_only: bool,

	pub required: bool,

	pub case_exact: bool,

	pub name: String,

	pub r#type: String,

	pub description: String,

	pub schema: String,

	pub multi_valued_attribute_child_name: Option<String>,

	/// Nested attributes of a complex attribute. The API may send a single
	/// attribute object instead of a list.
	#[serde(
		deserialize_with = "codec::sub_attributes::deserialize",
		skip_serializing_if = "Vec::is_empty"
	)]
	pub sub_attributes: Vec<Attribute>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub canonical_values: Vec<String>,
}

/// Resource metadata.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Meta {
	pub created: Option<String>,

	pub last_modified: Option<String>,

	pub location: Option<String>,

	pub version: Option<String>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub attributes: Vec<String>,
}

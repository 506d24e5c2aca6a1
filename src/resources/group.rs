use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

use super::Meta;

/// A group.
///
/// See: <https://api.slack.com/scim#groups>
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
	pub id: Option<String>,

	pub display_name: Option<String>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub members: Vec<Member>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	pub schemas: Vec<String>,

	pub meta: Option<Meta>,
}

impl Group {
	pub fn new(display_name: impl Into<String>) -> Self {
		Self {
			display_name: Some(display_name.into()),
			..Default::default()
		}
	}

	pub fn with_members(self, members: Vec<Member>) -> Self {
		Self { members, ..self }
	}
}

/// Member of a [`Group`].
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
	/// Identifier of the member user.
	pub value: String,

	pub display: Option<String>,
}

impl Member {
	pub fn new(value: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			display: None,
		}
	}
}

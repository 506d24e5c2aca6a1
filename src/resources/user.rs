use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

use crate::util::codec;

use super::{Group, Meta};

/// Wire key of the enterprise user schema extension.
pub const ENTERPRISE_USER_EXTENSION: &str = "urn:scim:schemas:extension:enterprise:1.0";

/// A user.
///
/// See: <https://api.slack.com/scim#users>
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
	pub active: Option<bool>,

	pub id: Option<String>,

	pub external_id: Option<String>,

	pub user_name: Option<String>,

	pub nick_name: Option<String>,

	pub profile_url: Option<String>,

	pub display_name: Option<String>,

	pub user_type: Option<String>,

	pub title: Option<String>,

	pub preferred_language: Option<String>,

	pub locale: Option<String>,

	pub timezone: Option<String>,

	pub password: Option<String>,

	pub name: Option<Name>,

	pub meta: Option<Meta>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub emails: Vec<Email>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub addresses: Vec<Address>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub phone_numbers: Vec<PhoneNumber>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub roles: Vec<Role>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	#[serde(skip_serializing_if = "Vec::is_empty")]
	pub photos: Vec<Photo>,

	/// Groups the user belongs to.
	///
	/// Only the group id and display name are carried on the wire.
	#[serde(with = "codec::group_references", skip_serializing_if = "Vec::is_empty")]
	pub groups: Vec<Group>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	pub schemas: Vec<String>,

	#[serde(rename = "urn:scim:schemas:extension:enterprise:1.0")]
	pub enterprise_extension: Option<EnterpriseUserExtension>,
}

impl User {
	pub fn new(user_name: impl Into<String>) -> Self {
		Self {
			user_name: Some(user_name.into()),
			..Default::default()
		}
	}

	/// Primary email address, or the first one if none is flagged primary.
	pub fn primary_email(&self) -> Option<&Email> {
		self.emails
			.iter()
			.find(|e| e.primary == Some(true))
			.or_else(|| self.emails.first())
	}
}

/// SCIM enterprise user schema extension.
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnterpriseUserExtension {
	pub employee_number: Option<String>,

	pub cost_center: Option<String>,

	pub organization: Option<String>,

	pub division: Option<String>,

	pub department: Option<String>,

	pub manager: Option<Manager>,
}

/// A user's manager.
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Manager {
	pub manager_id: Option<String>,

	pub display_name: Option<String>,
}

/// Components of a user's real name.
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Name {
	pub family_name: Option<String>,

	pub given_name: Option<String>,

	pub honorific_prefix: Option<String>,
}

/// Email address of a user.
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Email {
	pub value: Option<String>,

	pub r#type: Option<String>,

	pub primary: Option<bool>,
}

/// Physical mailing address of a user.
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Address {
	pub street_address: Option<String>,

	pub locality: Option<String>,

	pub region: Option<String>,

	pub postal_code: Option<String>,

	pub country: Option<String>,

	pub primary: Option<bool>,
}

#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNumber {
	pub value: Option<String>,

	pub r#type: Option<String>,

	pub primary: Option<bool>,
}

/// URL of a photo of the user.
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Photo {
	pub value: Option<String>,

	pub r#type: Option<String>,

	pub primary: Option<bool>,
}

/// Role of a user, e.g. "Student" or "Faculty".
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Role {
	pub value: Option<String>,

	pub r#type: Option<String>,

	pub primary: Option<bool>,
}

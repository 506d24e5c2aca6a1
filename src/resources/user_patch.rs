use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as, skip_serializing_none};

use crate::util::{Patch, codec};

use super::{Address, Email, Group, Manager, Meta, PhoneNumber, Photo, Role};

/// Partial update of a [`User`](super::User), sent with `PATCH /Users/{id}`.
///
/// Fields left [`Patch::Absent`] are not sent and keep their current value
/// on the server; [`Patch::Null`] clears them.
#[serde_as]
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserPatch {
	pub id: Option<String>,

	pub user_name: Option<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub active: Patch<bool>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub external_id: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub nick_name: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub profile_url: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub display_name: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub user_type: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub title: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub preferred_language: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub locale: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub timezone: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub password: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub name: Patch<NamePatch>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub meta: Patch<Meta>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub emails: Patch<Vec<Email>>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub addresses: Patch<Vec<Address>>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub phone_numbers: Patch<Vec<PhoneNumber>>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub roles: Patch<Vec<Role>>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub photos: Patch<Vec<Photo>>,

	#[serde(
		with = "codec::patch_group_references",
		skip_serializing_if = "Patch::is_absent"
	)]
	pub groups: Patch<Vec<Group>>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	pub schemas: Vec<String>,

	#[serde(
		rename = "urn:scim:schemas:extension:enterprise:1.0",
		skip_serializing_if = "Patch::is_absent"
	)]
	pub enterprise_extension: Patch<EnterpriseUserExtensionPatch>,
}

/// Partial update of a [`Name`](super::Name).
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NamePatch {
	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub family_name: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub given_name: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub honorific_prefix: Patch<String>,
}

/// Partial update of an
/// [`EnterpriseUserExtension`](super::EnterpriseUserExtension).
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EnterpriseUserExtensionPatch {
	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub employee_number: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub cost_center: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub organization: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub division: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub department: Patch<String>,

	#[serde(skip_serializing_if = "Patch::is_absent")]
	pub manager: Patch<Manager>,
}

//! Codecs for fields whose wire shape differs from their Rust type.
//!
//! The API sometimes emits a single value where a list is expected. The
//! `schema_ids` and `sub_attributes` codecs accept both shapes and always
//! produce a list; they encode back as a plain list.
//!
//! Group memberships of a user travel as `{"value", "display"}` reference
//! objects rather than full groups; `group_references` projects between the
//! two.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de::DeserializeOwned, de::Error};
use serde_with::skip_serializing_none;

use crate::{resources::Group, util::Patch};

/// Decodes either a list of `T` or a single `T`.
///
/// `null` yields an empty list. When neither shape matches, the error of
/// the single-value attempt is returned.
fn list_or_single<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
	D: Deserializer<'de>,
	T: DeserializeOwned,
{
	let value = serde_json::Value::deserialize(deserializer)?;

	if value.is_null() {
		return Ok(Vec::new());
	}

	match Vec::<T>::deserialize(&value) {
		Ok(list) => Ok(list),
		Err(_) => T::deserialize(value)
			.map(|single| vec![single])
			.map_err(D::Error::custom),
	}
}

/// `Schema::schema`: list of schema URIs, or a single URI string.
pub mod schema_ids {
	use super::*;

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
	where
		D: Deserializer<'de>,
	{
		list_or_single(deserializer)
	}
}

/// `Attribute::sub_attributes`: list of attributes, or a single attribute
/// object.
pub mod sub_attributes {
	use crate::resources::Attribute;

	use super::*;

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Attribute>, D::Error>
	where
		D: Deserializer<'de>,
	{
		list_or_single(deserializer)
	}
}

#[skip_serializing_none]
#[derive(Serialize)]
struct GroupReferenceRef<'a> {
	value: Option<&'a str>,
	display: Option<&'a str>,
}

impl<'a> From<&'a Group> for GroupReferenceRef<'a> {
	fn from(group: &'a Group) -> Self {
		Self {
			value: group.id.as_deref(),
			display: group.display_name.as_deref(),
		}
	}
}

#[derive(Deserialize)]
struct GroupReference {
	#[serde(default)]
	value: Option<String>,

	#[serde(default)]
	display: Option<String>,
}

impl From<GroupReference> for Group {
	fn from(reference: GroupReference) -> Self {
		Self {
			id: reference.value,
			display_name: reference.display,
			..Default::default()
		}
	}
}

/// `User::groups`: every group is reduced to its id and display name.
pub mod group_references {
	use super::*;

	pub fn serialize<S>(groups: &[Group], serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_seq(groups.iter().map(GroupReferenceRef::from))
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Group>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let references = Option::<Vec<GroupReference>>::deserialize(deserializer)?;
		Ok(references
			.unwrap_or_default()
			.into_iter()
			.map(Group::from)
			.collect())
	}
}

/// `UserPatch::groups`: same projection as [`group_references`], wrapped in
/// a [`Patch`].
pub mod patch_group_references {
	use super::*;

	pub fn serialize<S>(groups: &Patch<Vec<Group>>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		groups
			.as_ref()
			.map(|groups| {
				groups
					.iter()
					.map(GroupReferenceRef::from)
					.collect::<Vec<_>>()
			})
			.serialize(serializer)
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<Patch<Vec<Group>>, D::Error>
	where
		D: Deserializer<'de>,
	{
		let references = Patch::<Vec<GroupReference>>::deserialize(deserializer)?;
		Ok(references.map(|references| references.into_iter().map(Group::from).collect()))
	}
}

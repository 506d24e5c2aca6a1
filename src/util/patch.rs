use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Value of a field in a partial update.
///
/// Distinguishes "leave this field alone" ([`Patch::Absent`], not
/// serialized at all) from "clear this field" ([`Patch::Null`], serialized
/// as `null`). Struct fields of this type must be annotated with
/// `#[serde(default, skip_serializing_if = "Patch::is_absent")]`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Patch<T> {
	#[default]
	Absent,
	Null,
	Value(T),
}

impl<T> Patch<T> {
	pub fn is_absent(&self) -> bool {
		matches!(self, Self::Absent)
	}

	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	pub fn value(&self) -> Option<&T> {
		match self {
			Self::Value(v) => Some(v),
			_ => None,
		}
	}

	pub fn as_ref(&self) -> Patch<&T> {
		match self {
			Self::Absent => Patch::Absent,
			Self::Null => Patch::Null,
			Self::Value(v) => Patch::Value(v),
		}
	}

	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Patch<U> {
		match self {
			Self::Absent => Patch::Absent,
			Self::Null => Patch::Null,
			Self::Value(v) => Patch::Value(f(v)),
		}
	}
}

impl<T> From<T> for Patch<T> {
	fn from(value: T) -> Self {
		Self::Value(value)
	}
}

impl<T: Serialize> Serialize for Patch<T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Value(v) => v.serialize(serializer),
			Self::Absent | Self::Null => serializer.serialize_none(),
		}
	}
}

/// A present field deserializes to [`Patch::Null`] or [`Patch::Value`];
/// [`Patch::Absent`] comes from `#[serde(default)]`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(match Option::<T>::deserialize(deserializer)? {
			Some(v) => Self::Value(v),
			None => Self::Null,
		})
	}
}

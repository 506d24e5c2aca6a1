use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use super::{Group, User};

/// Page of resources returned by a list endpoint.
///
/// The resource array is named `Resources` on the wire; the lowercase form
/// is accepted too.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ListResponse<T> {
	#[serde(default)]
	pub total_results: u64,

	#[serde(default)]
	pub item_per_page: u64,

	#[serde(default)]
	pub start_index: u64,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	#[serde(default)]
	pub schemas: Vec<String>,

	#[serde_as(deserialize_as = "DefaultOnNull")]
	#[serde(rename = "Resources", alias = "resources", default = "Vec::new")]
	pub resources: Vec<T>,
}

impl<T> Default for ListResponse<T> {
	fn default() -> Self {
		Self {
			total_results: 0,
			item_per_page: 0,
			start_index: 0,
			schemas: Vec::new(),
			resources: Vec::new(),
		}
	}
}

impl<T> IntoIterator for ListResponse<T> {
	type Item = T;
	type IntoIter = std::vec::IntoIter<T>;

	fn into_iter(self) -> Self::IntoIter {
		self.resources.into_iter()
	}
}

/// Response of `GET /Users`.
pub type Users = ListResponse<User>;

/// Response of `GET /Groups`.
pub type Groups = ListResponse<Group>;

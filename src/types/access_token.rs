use http::HeaderValue;
use str_newtype::StrNewType;

use crate::client::ScimClientError;

use super::is_vschar;

/// Bearer token used to authenticate against the SCIM API (borrowed).
///
/// Any token accepted by [`AccessToken::new`] is a valid HTTP header value,
/// so building the `Authorization` header from it cannot fail.
///
/// # Grammar
///
/// ```abnf
/// token = 1*VSCHAR
/// ```
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, StrNewType)]
#[newtype(
	serde,
	owned(AccessTokenBuf, derive(PartialEq, Eq, PartialOrd, Ord, Hash))
)]
pub struct AccessToken(str);

impl AccessToken {
	pub const fn validate_str(s: &str) -> bool {
		Self::validate_bytes(s.as_bytes())
	}

	pub const fn validate_bytes(bytes: &[u8]) -> bool {
		let mut i = 0;

		while i < bytes.len() {
			if !is_vschar(bytes[i]) {
				return false;
			}

			i += 1
		}

		i > 0
	}

	/// Builds the `Authorization: Bearer <token>` header value.
	///
	/// The value is flagged as sensitive so that it is not printed by the
	/// `Debug` implementation of the request.
	pub fn to_bearer_header(&self) -> Result<HeaderValue, ScimClientError> {
		let mut value =
			HeaderValue::try_from(format!("Bearer {self}")).map_err(ScimClientError::request)?;
		value.set_sensitive(true);
		Ok(value)
	}
}

#[macro_export]
macro_rules! access_token {
	($value:literal) => {{
		match $crate::AccessToken::new($value) {
			Ok(value) => value,
			Err(_) => panic!("invalid access token"),
		}
	}};
}

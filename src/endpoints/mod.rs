//! Resource operations.
//!
//! Every operation is a method of [`Client`](crate::Client), returning the
//! decoded resource along with the response head, or a
//! [`CallError`](crate::CallError).
use crate::client::ScimClientError;

mod groups;
mod schemas;
mod service_provider_config;
mod users;

/// Rejects empty resource identifiers before any request is built.
fn require_id(id: &str) -> Result<&str, ScimClientError> {
	if id.is_empty() {
		Err(ScimClientError::validation("id is required"))
	} else {
		Ok(id)
	}
}

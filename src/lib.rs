//! Client for the [Slack SCIM API][scim], provisioning users and groups.
//!
//! Every API operation is an `async` method of [`Client`], returning the
//! decoded resource along with the head of the HTTP response, or a
//! [`CallError`] that keeps that head whenever the server answered.
//!
//! ```no_run
//! # async fn run() -> Result<(), scim_client::CallError> {
//! use scim_client::{Client, Pagination, access_token};
//!
//! let client = Client::new(access_token!("xoxp-1234").to_owned());
//!
//! let users = client
//! 	.list_users(Some(&Pagination::new(100, 1)), Some(r#"userName eq "jane""#))
//! 	.await?
//! 	.into_body();
//!
//! for user in users {
//! 	println!("{:?}", user.user_name);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`client`]: the client, its configuration and error types.
//! - [`endpoints`]: resource operations.
//! - [`resources`]: users, groups, schemas and service provider
//!   configuration.
//! - [`transport`]: request construction, HTTP client abstraction and
//!   response handling strategies.
//! - [`util`]: query parameters, patch fields and wire codecs.
//!
//! [scim]: https://api.slack.com/scim
#[cfg(feature = "reqwest")]
pub use reqwest;

pub use http;

pub mod client;
pub mod endpoints;
pub mod resources;
pub mod transport;
mod types;
pub mod util;

#[cfg(test)]
mod testing;

pub use client::{ApiError, CallError, Client, ClientConfig, DEFAULT_ENDPOINT, ScimClientError};
pub use resources::*;
pub use types::*;
pub use util::{Pagination, Patch};

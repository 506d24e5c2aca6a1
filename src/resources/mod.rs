//! Resource types exchanged with the API.
mod group;
mod list;
mod schema;
mod service_provider_config;
mod user;
mod user_patch;

pub use group::*;
pub use list::*;
pub use schema::*;
pub use service_provider_config::*;
pub use user::*;
pub use user_patch::*;

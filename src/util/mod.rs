//! Query string, partial update and wire codec utilities.
pub mod codec;
mod patch;
mod query;

pub use patch::*;
pub use query::*;

//! Validated string types.
//!
//! Types come in borrowed/owned pairs ([`AccessToken`] /
//! [`AccessTokenBuf`]) following the same pattern as [`str`] / [`String`].
mod access_token;

pub use access_token::*;

/// Returns `true` if the byte is a VSCHAR (visible ASCII character plus
/// space), i.e. in the range `0x20..=0x7E`.
const fn is_vschar(c: u8) -> bool {
	c >= 0x20 && c <= 0x7e
}

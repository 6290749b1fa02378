//! Authentication primitives.
//!
//! - [`jwt`] -- access-token signing and validation.
//! - [`identity`] -- turns a raw `Authorization` header into an optional
//!   [`Identity`](drawboard_core::authorization::Identity).

pub mod identity;
pub mod jwt;

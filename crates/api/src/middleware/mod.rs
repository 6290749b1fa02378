//! Request extractors.
//!
//! - [`auth::MaybeIdentity`] -- the caller's identity, if their bearer token
//!   checks out.

pub mod auth;

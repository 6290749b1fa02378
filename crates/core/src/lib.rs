//! Domain primitives for the collaborative drawing board.
//!
//! Everything in this crate is free of I/O: identifiers, the error taxonomy,
//! role enumerations, the authorization gate, the shape property bag and the
//! cursor pagination envelope. The persistence and transport crates build on
//! these types.

pub mod authorization;
pub mod error;
pub mod pagination;
pub mod roles;
pub mod serde_helpers;
pub mod shape;
pub mod types;
pub mod validation;

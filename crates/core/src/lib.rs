//! Shared domain types for the folio portfolio backend.
//!
//! Deliberately small: type aliases used by every crate and the domain
//! error enum that the HTTP layer maps onto responses.

pub mod error;
pub mod types;

//! CMS authentication: argon2id password hashing and opaque session
//! tokens hashed with HMAC-SHA256 at rest.

pub mod password;
pub mod token;

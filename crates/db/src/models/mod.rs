//! Entity models and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//!
//! Rows in this system are read far more than they are written; update
//! DTOs exist only where an operation actually mutates the row.

pub mod color;
pub mod image;
pub mod logo;
pub mod project;
pub mod session;
pub mod tag;
pub mod typography;
pub mod user;

//! Tag entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::DbId;

/// A tag row belonging to a project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
}

/// DTO for creating a tag row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTag {
    pub project_id: DbId,
    pub name: String,
}

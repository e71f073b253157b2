//! Logo entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::DbId;

/// A logo row. The `logos.project_id` column is UNIQUE, so a project
/// has zero or one of these.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Logo {
    pub id: DbId,
    pub project_id: DbId,
    pub url: String,
}

/// DTO for creating a logo row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateLogo {
    pub project_id: DbId,
    pub url: String,
}

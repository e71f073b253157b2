//! Typography entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::DbId;

/// A typography row: one typeface choice belonging to a project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Typography {
    pub id: DbId,
    pub project_id: DbId,
    pub font: String,
    pub category: String,
    pub weight: String,
}

/// DTO for creating a typography row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTypography {
    pub project_id: DbId,
    pub font: String,
    pub category: String,
    pub weight: String,
}

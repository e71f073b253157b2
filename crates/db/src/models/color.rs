//! Color entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::DbId;

/// A color row: one palette entry belonging to a project.
///
/// `role` describes where the color is used (e.g. `"button"`,
/// `"background"`, `"accent"`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Color {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    pub hex: String,
    pub role: String,
}

/// DTO for creating a color row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateColor {
    pub project_id: DbId,
    pub name: String,
    pub hex: String,
    pub role: String,
}

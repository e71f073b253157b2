//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
///
/// `cover_image` is a plain URL, not a reference into the `images`
/// table (see DESIGN.md).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub role: String,
    pub url: Option<String>,
    pub cover_image: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub description: String,
    pub category: String,
    pub role: String,
    pub url: Option<String>,
    pub cover_image: Option<String>,
}

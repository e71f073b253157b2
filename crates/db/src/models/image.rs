//! Image entity model and DTO.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// An image row. Standalone: nothing in the project tables references
/// it; `users.image_id` may point here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Image {
    pub id: DbId,
    pub url: String,
    pub created_at: Timestamp,
}

/// DTO for creating an image row.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateImage {
    pub url: String,
}

//! Repository for the `images` table.

use chrono::Utc;
use folio_core::types::DbId;

use crate::models::image::{CreateImage, Image};
use crate::DbPool;

const COLUMNS: &str = "id, url, created_at";

pub struct ImageRepo;

impl ImageRepo {
    /// Insert a new image row, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateImage) -> Result<Image, sqlx::Error> {
        let query = format!(
            "INSERT INTO images (url, created_at)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Image>(&query)
            .bind(&input.url)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find an image by its internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Image>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM images WHERE id = ?");
        sqlx::query_as::<_, Image>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Count all images.
    pub async fn count(pool: &DbPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM images")
            .fetch_one(pool)
            .await
    }
}

//! Repository for the `colors` table.

use folio_core::types::DbId;

use crate::models::color::{Color, CreateColor};
use crate::repositories::sql_placeholders;
use crate::DbPool;

const COLUMNS: &str = "id, project_id, name, hex, role";

pub struct ColorRepo;

impl ColorRepo {
    /// Insert a new color row, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateColor) -> Result<Color, sqlx::Error> {
        let query = format!(
            "INSERT INTO colors (project_id, name, hex, role)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Color>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.hex)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Batch-fetch color rows for a set of projects, ascending by id.
    pub async fn list_for_projects(
        pool: &DbPool,
        project_ids: &[DbId],
    ) -> Result<Vec<Color>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM colors WHERE project_id IN ({}) ORDER BY id",
            sql_placeholders(project_ids.len())
        );
        let mut q = sqlx::query_as::<_, Color>(&query);
        for id in project_ids {
            q = q.bind(*id);
        }
        q.fetch_all(pool).await
    }
}

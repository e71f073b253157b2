//! Repository for the `typography` table.

use folio_core::types::DbId;

use crate::models::typography::{CreateTypography, Typography};
use crate::repositories::sql_placeholders;
use crate::DbPool;

const COLUMNS: &str = "id, project_id, font, category, weight";

pub struct TypographyRepo;

impl TypographyRepo {
    /// Insert a new typography row, returning the created row.
    pub async fn create(
        pool: &DbPool,
        input: &CreateTypography,
    ) -> Result<Typography, sqlx::Error> {
        let query = format!(
            "INSERT INTO typography (project_id, font, category, weight)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Typography>(&query)
            .bind(input.project_id)
            .bind(&input.font)
            .bind(&input.category)
            .bind(&input.weight)
            .fetch_one(pool)
            .await
    }

    /// Batch-fetch typography rows for a set of projects, ascending by id.
    pub async fn list_for_projects(
        pool: &DbPool,
        project_ids: &[DbId],
    ) -> Result<Vec<Typography>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM typography WHERE project_id IN ({}) ORDER BY id",
            sql_placeholders(project_ids.len())
        );
        let mut q = sqlx::query_as::<_, Typography>(&query);
        for id in project_ids {
            q = q.bind(*id);
        }
        q.fetch_all(pool).await
    }
}

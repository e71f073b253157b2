//! Repository for the `tags` table.

use folio_core::types::DbId;

use crate::models::tag::{CreateTag, Tag};
use crate::repositories::sql_placeholders;
use crate::DbPool;

const COLUMNS: &str = "id, project_id, name";

pub struct TagRepo;

impl TagRepo {
    /// Insert a new tag row, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateTag) -> Result<Tag, sqlx::Error> {
        let query = format!(
            "INSERT INTO tags (project_id, name)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Tag>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// Batch-fetch tag rows for a set of projects, ascending by id.
    pub async fn list_for_projects(
        pool: &DbPool,
        project_ids: &[DbId],
    ) -> Result<Vec<Tag>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM tags WHERE project_id IN ({}) ORDER BY id",
            sql_placeholders(project_ids.len())
        );
        let mut q = sqlx::query_as::<_, Tag>(&query);
        for id in project_ids {
            q = q.bind(*id);
        }
        q.fetch_all(pool).await
    }
}

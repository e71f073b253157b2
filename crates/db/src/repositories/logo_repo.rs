//! Repository for the `logos` table.

use folio_core::types::DbId;

use crate::models::logo::{CreateLogo, Logo};
use crate::repositories::sql_placeholders;
use crate::DbPool;

const COLUMNS: &str = "id, project_id, url";

pub struct LogoRepo;

impl LogoRepo {
    /// Insert a logo row, returning the created row.
    ///
    /// Fails with a unique-constraint violation if the project already
    /// has a logo.
    pub async fn create(pool: &DbPool, input: &CreateLogo) -> Result<Logo, sqlx::Error> {
        let query = format!(
            "INSERT INTO logos (project_id, url)
             VALUES (?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Logo>(&query)
            .bind(input.project_id)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Batch-fetch logo rows for a set of projects.
    ///
    /// At most one row per project thanks to the unique constraint.
    pub async fn list_for_projects(
        pool: &DbPool,
        project_ids: &[DbId],
    ) -> Result<Vec<Logo>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM logos WHERE project_id IN ({}) ORDER BY id",
            sql_placeholders(project_ids.len())
        );
        let mut q = sqlx::query_as::<_, Logo>(&query);
        for id in project_ids {
            q = q.bind(*id);
        }
        q.fetch_all(pool).await
    }
}

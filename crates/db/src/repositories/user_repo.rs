//! Repository for the `users` table.

use chrono::Utc;
use folio_core::types::DbId;

use crate::models::user::{CreateUser, User};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, admin_name, password_hash, last_active_at, image_url, \
                       project_id, image_id, created_at";

/// Provides operations for the single-admin user table.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user, returning the created row.
    ///
    /// Fails with a unique-constraint violation if the admin name is
    /// already taken.
    pub async fn create(pool: &DbPool, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (admin_name, password_hash, image_url, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.admin_name)
            .bind(&input.password_hash)
            .bind(&input.image_url)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find a user by internal ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by admin name (case-sensitive).
    pub async fn find_by_admin_name(
        pool: &DbPool,
        admin_name: &str,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE admin_name = ?");
        sqlx::query_as::<_, User>(&query)
            .bind(admin_name)
            .fetch_optional(pool)
            .await
    }

    /// Set `last_active_at` to now, returning the updated row.
    /// Called on successful sign-in. Returns `None` if the user is gone.
    pub async fn touch_last_active(pool: &DbPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!(
            "UPDATE users SET last_active_at = ? WHERE id = ? RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}

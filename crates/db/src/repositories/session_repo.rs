//! Repository for the `sessions` table.

use chrono::Utc;
use folio_core::types::DbId;

use crate::models::session::{CreateSession, Session};
use crate::DbPool;

const COLUMNS: &str = "id, user_id, token_hash, expires_at, created_at";

/// Provides CMS session storage. Tokens are stored as HMAC digests
/// computed by the API layer; this repository never sees plaintext.
pub struct SessionRepo;

impl SessionRepo {
    /// Insert a new session, returning the created row.
    pub async fn create(pool: &DbPool, input: &CreateSession) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions (user_id, token_hash, expires_at, created_at)
             VALUES (?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.user_id)
            .bind(&input.token_hash)
            .bind(input.expires_at)
            .bind(Utc::now())
            .fetch_one(pool)
            .await
    }

    /// Find an unexpired session by its token digest.
    pub async fn find_valid_by_token_hash(
        pool: &DbPool,
        token_hash: &str,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sessions WHERE token_hash = ? AND expires_at > ?"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(token_hash)
            .bind(Utc::now())
            .fetch_optional(pool)
            .await
    }

    /// Revoke every session belonging to a user. Returns the number of
    /// sessions removed.
    pub async fn revoke_all_for_user(pool: &DbPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sessions WHERE user_id = ?")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

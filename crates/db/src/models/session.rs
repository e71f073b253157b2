//! CMS session model and DTO.

use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// A session row. Stores only the HMAC-SHA256 digest of the opaque
/// session token, never the token itself.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a session row.
#[derive(Debug, Clone)]
pub struct CreateSession {
    pub user_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}

//! User (CMS admin) entity model and DTOs.

use serde::Serialize;
use sqlx::FromRow;

use folio_core::types::{DbId, Timestamp};

/// Full user row from the `users` table.
///
/// Contains the password hash -- never serialize this to API responses
/// directly. Use [`UserResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub admin_name: String,
    pub password_hash: String,
    pub last_active_at: Option<Timestamp>,
    pub image_url: Option<String>,
    pub project_id: Option<DbId>,
    pub image_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// Safe user representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub admin_name: String,
    pub last_active_at: Option<Timestamp>,
    pub image_url: Option<String>,
    pub created_at: Timestamp,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            admin_name: user.admin_name,
            last_active_at: user.last_active_at,
            image_url: user.image_url,
            created_at: user.created_at,
        }
    }
}

/// DTO for creating a new user. The caller supplies an already-hashed
/// password (hashing lives in the API crate's auth module).
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub admin_name: String,
    pub password_hash: String,
    pub image_url: Option<String>,
}

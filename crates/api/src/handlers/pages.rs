//! Placeholder pages.
//!
//! These routes exist in the site map but have no specified behavior
//! yet. They answer 501 with a stable error code instead of rendering
//! nothing, so clients can tell "not built" apart from "not found".

use axum::extract::Path;

use folio_core::types::DbId;

use crate::error::AppError;

/// GET /about
pub async fn about() -> AppError {
    AppError::NotImplemented("/about")
}

/// GET /resume
pub async fn resume() -> AppError {
    AppError::NotImplemented("/resume")
}

/// GET /blog
pub async fn blog() -> AppError {
    AppError::NotImplemented("/blog")
}

/// GET /blog/post/{post_id}
pub async fn blog_post(Path(_post_id): Path<DbId>) -> AppError {
    AppError::NotImplemented("/blog/post/{post_id}")
}

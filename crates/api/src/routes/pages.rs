//! Route definitions for the public site pages.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{contact, home, pages, project};
use crate::state::AppState;

/// Public routes mounted at the root.
///
/// ```text
/// GET  /                        -> home
/// GET  /projects                -> list
/// GET  /project/{project_name}  -> get_by_name
/// GET  /about                   -> 501
/// POST /contact                 -> submit
/// GET  /resume                  -> 501
/// GET  /blog                    -> 501
/// GET  /blog/post/{post_id}     -> 501
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/projects", get(project::list))
        .route("/project/{project_name}", get(project::get_by_name))
        .route("/about", get(pages::about))
        .route("/contact", post(contact::submit))
        .route("/resume", get(pages::resume))
        .route("/blog", get(pages::blog))
        .route("/blog/post/{post_id}", get(pages::blog_post))
}

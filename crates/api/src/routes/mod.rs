pub mod cms;
pub mod health;
pub mod pages;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree (everything except `/health`).
///
/// Route hierarchy:
///
/// ```text
/// /                        home: title + portfolio aggregate
/// /projects                project list
/// /project/{project_name}  project detail (aggregate shape)
/// /about                   501 stub
/// /contact                 contact form (POST)
/// /resume                  501 stub
/// /blog                    501 stub
/// /blog/post/{post_id}     501 stub
///
/// /cms/signin              sign in (public, POST)
/// /cms/signout             sign out (requires session, POST)
/// /cms/passcode            501 stub (POST)
/// /cms                     admin dashboard (requires session)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(pages::router())
        .nest("/cms", cms::router())
}

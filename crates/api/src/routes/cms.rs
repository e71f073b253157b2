//! Route definitions for the `/cms` sign-in area.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cms;
use crate::state::AppState;

/// Routes mounted at `/cms`.
///
/// ```text
/// POST /signin    -> signin (public)
/// POST /signout   -> signout (requires session)
/// POST /passcode  -> 501
/// GET  /          -> dashboard (requires session)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cms::dashboard))
        .route("/signin", post(cms::signin))
        .route("/signout", post(cms::signout))
        .route("/passcode", post(cms::passcode))
}

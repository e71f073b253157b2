//! Handlers for the `/cms` sign-in area.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use folio_core::error::CoreError;
use folio_core::types::Timestamp;
use folio_db::models::session::CreateSession;
use folio_db::models::user::UserResponse;
use folio_db::repositories::{ImageRepo, ProjectRepo, SessionRepo, UserRepo};

use crate::auth::password::verify_password;
use crate::auth::token::{generate_session_token, hash_session_token};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /cms/signin`.
#[derive(Debug, Deserialize)]
pub struct SignInRequest {
    pub admin_name: String,
    pub password: String,
}

/// Successful sign-in response.
#[derive(Debug, Serialize)]
pub struct SignInResponse {
    /// Opaque session token; present this as `Authorization: Bearer <token>`.
    pub token: String,
    pub expires_at: Timestamp,
    pub admin: UserResponse,
}

/// Payload for `GET /cms`.
#[derive(Debug, Serialize)]
pub struct Dashboard {
    pub admin: UserResponse,
    pub project_count: i64,
    pub image_count: i64,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /cms/signin
///
/// Authenticate with admin name + password. Issues an opaque session
/// token and records the admin's activity.
pub async fn signin(
    State(state): State<AppState>,
    Json(input): Json<SignInRequest>,
) -> AppResult<Json<DataResponse<SignInResponse>>> {
    // Look up the admin; a missing name and a wrong password must be
    // indistinguishable to the caller.
    let user = UserRepo::find_by_admin_name(&state.pool, &input.admin_name)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid admin name or password".into(),
            ))
        })?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid admin name or password".into(),
        )));
    }

    // Re-read the row so the response reflects the recorded activity.
    let user = UserRepo::touch_last_active(&state.pool, user.id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user.id,
        }))?;

    let token = generate_session_token();
    let token_hash = hash_session_token(&token, &state.config.secret_key);
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.session_expiry_hours);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            user_id: user.id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    tracing::info!(admin = %user.admin_name, "CMS sign-in");

    Ok(Json(DataResponse {
        data: SignInResponse {
            token,
            expires_at,
            admin: user.into(),
        },
    }))
}

/// POST /cms/signout
///
/// Revoke every session for the authenticated admin. Returns 204.
pub async fn signout(State(state): State<AppState>, admin: AuthAdmin) -> AppResult<StatusCode> {
    SessionRepo::revoke_all_for_user(&state.pool, admin.user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /cms
///
/// The admin landing payload: who is signed in plus content counts.
pub async fn dashboard(
    State(state): State<AppState>,
    admin: AuthAdmin,
) -> AppResult<Json<DataResponse<Dashboard>>> {
    let user = UserRepo::find_by_id(&state.pool, admin.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: admin.user_id,
        }))?;

    let project_count = ProjectRepo::count(&state.pool).await?;
    let image_count = ImageRepo::count(&state.pool).await?;

    Ok(Json(DataResponse {
        data: Dashboard {
            admin: user.into(),
            project_count,
            image_count,
        },
    }))
}

/// POST /cms/passcode
///
/// Present in the site map but never specified; answers 501.
pub async fn passcode() -> AppError {
    AppError::NotImplemented("/cms/passcode")
}

//! Handler for the contact form.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use folio_core::error::CoreError;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Request body for `POST /contact`.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
    #[validate(email(message = "email address is not valid"))]
    pub email: String,
    #[validate(length(min = 1, message = "message must not be empty"))]
    pub message: String,
}

/// POST /contact
///
/// Validates the submission and forwards it to the site owner via the
/// configured mailer. Returns 202 once the message is handed to SMTP.
pub async fn submit(
    State(state): State<AppState>,
    Json(input): Json<ContactRequest>,
) -> AppResult<StatusCode> {
    input
        .validate()
        .map_err(|e| AppError::Core(CoreError::Validation(e.to_string())))?;

    let mailer = state.mailer.as_ref().ok_or(AppError::MailNotConfigured)?;

    mailer
        .send_contact_message(&input.name, &input.email, &input.message)
        .await?;

    Ok(StatusCode::ACCEPTED)
}

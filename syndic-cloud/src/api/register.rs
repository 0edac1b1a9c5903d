//! Resident self-registration
//!
//! POST /api/register creates a member (role=1, status=pending). Pending
//! residents cannot log in until a syndic activates them.

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{MemberRole, MemberStatus};
use shared::util::{is_valid_email, now_millis};

use crate::db;
use crate::error::is_unique_violation;
use crate::state::AppState;
use crate::util::hash_password;

use super::ApiResult;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub password: String,
}

#[derive(serde::Serialize)]
pub struct RegisterResponse {
    pub member_id: i64,
    pub status: String,
}

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<RegisterResponse> {
    let full_name = req.full_name.trim();
    let email = req.email.trim().to_lowercase();

    if full_name.is_empty() {
        return Err(AppError::required_field("full_name"));
    }
    if email.is_empty() {
        return Err(AppError::required_field("email"));
    }
    if !is_valid_email(&email) {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            "Invalid email address",
        ));
    }
    if req.password.len() < 8 {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }

    let password_hash = hash_password(&req.password).map_err(|e| {
        tracing::error!("Password hash error: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    // Email uniqueness comes from the UNIQUE constraint, not a pre-check.
    let now = now_millis();
    let member_id = db::members::create(
        &state.pool,
        full_name,
        &email,
        req.phone.as_deref(),
        &password_hash,
        MemberRole::Resident.as_db(),
        MemberStatus::Pending.as_db(),
        now,
    )
    .await
    .map_err(|e| {
        if is_unique_violation(&e) {
            AppError::duplicate_email()
        } else {
            tracing::error!("Failed to create member: {e}");
            AppError::new(ErrorCode::DatabaseError)
        }
    })?;

    tracing::info!(member_id, "Resident registered (pending)");
    Ok(Json(RegisterResponse {
        member_id,
        status: MemberStatus::Pending.as_db().to_string(),
    }))
}

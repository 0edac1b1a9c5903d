//! Login endpoint shared by admins and members

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{MemberRole, MemberStatus};

use crate::auth::actor_auth::{ActorRole, create_token};
use crate::db;
use crate::state::AppState;
use crate::util::verify_password;

use super::ApiResult;

/// POST /api/auth/login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(serde::Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub id: i64,
    pub role: String,
    pub full_name: String,
    pub email: String,
    pub status: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let email = req.email.trim().to_lowercase();

    // Admins and members share the endpoint; the admin table is checked first.
    let admin = db::admins::find_by_email(&state.pool, &email)
        .await
        .map_err(|e| {
            tracing::error!("DB error during login: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    if let Some(admin) = admin {
        if !verify_password(&req.password, &admin.password_hash) {
            return Err(AppError::new(ErrorCode::InvalidCredentials));
        }

        let token = create_token(admin.id, ActorRole::Admin, &admin.email, &state.jwt_secret)
            .map_err(|e| {
                tracing::error!("JWT creation failed: {e}");
                AppError::new(ErrorCode::InternalError)
            })?;

        tracing::info!(admin_id = admin.id, "Admin logged in");
        return Ok(Json(LoginResponse {
            token,
            id: admin.id,
            role: ActorRole::Admin.as_str().to_string(),
            full_name: admin.full_name,
            email: admin.email,
            status: MemberStatus::Active.as_db().to_string(),
        }));
    }

    let member = db::members::find_by_email(&state.pool, &email)
        .await
        .map_err(|e| {
            tracing::error!("DB error during login: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?
        .ok_or_else(|| AppError::new(ErrorCode::InvalidCredentials))?;

    if !verify_password(&req.password, &member.password_hash) {
        return Err(AppError::new(ErrorCode::InvalidCredentials));
    }

    let status = MemberStatus::from_db(&member.status);
    if !status.is_some_and(|s| s.can_login()) {
        return Err(AppError::new(match status {
            Some(MemberStatus::Pending) => ErrorCode::AccountPending,
            Some(MemberStatus::Refunded) => ErrorCode::AccountRefunded,
            _ => ErrorCode::AccountInactive,
        }));
    }

    // Unknown role values get the least-privileged claim.
    let role = match MemberRole::from_db(member.role) {
        Some(MemberRole::Syndic) => ActorRole::Syndic,
        _ => ActorRole::Resident,
    };

    let token = create_token(member.id, role, &member.email, &state.jwt_secret).map_err(|e| {
        tracing::error!("JWT creation failed: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    tracing::info!(member_id = member.id, role = role.as_str(), "Member logged in");
    Ok(Json(LoginResponse {
        token,
        id: member.id,
        role: role.as_str().to_string(),
        full_name: member.full_name,
        email: member.email,
        status: member.status,
    }))
}

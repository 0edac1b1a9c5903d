//! Member profile and password endpoints

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::Member;
use shared::util::now_millis;

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;
use crate::util::{hash_password, verify_password};

/// GET /api/member/profile
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Member> {
    let member = db::members::find_by_id(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Profile query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?
        .ok_or_else(|| AppError::new(ErrorCode::MemberNotFound))?;
    Ok(Json(member.into_member()))
}

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub phone: Option<String>,
}

/// PUT /api/member/profile
pub async fn update_profile(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<UpdateProfileRequest>,
) -> ApiResult<Member> {
    if req.full_name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::required_field("full_name"));
    }

    db::members::update_profile(
        &state.pool,
        actor.id,
        req.full_name.as_deref().map(str::trim),
        req.phone.as_deref(),
        now_millis(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Profile update error: {e}");
        AppError::new(ErrorCode::DatabaseError)
    })?;

    let member = db::members::find_by_id(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Profile query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?
        .ok_or_else(|| AppError::new(ErrorCode::MemberNotFound))?;
    Ok(Json(member.into_member()))
}

#[derive(Deserialize)]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

/// POST /api/member/change-password
pub async fn change_password(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<ChangePasswordRequest>,
) -> ApiResult<serde_json::Value> {
    if req.new_password.len() < 8 {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }

    let member = db::members::find_by_id(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Member query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?
        .ok_or_else(|| AppError::new(ErrorCode::MemberNotFound))?;

    if !verify_password(&req.current_password, &member.password_hash) {
        return Err(AppError::new(ErrorCode::InvalidCredentials));
    }

    let password_hash = hash_password(&req.new_password).map_err(|e| {
        tracing::error!("Password hash error: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    db::members::update_password(&state.pool, actor.id, &password_hash, now_millis())
        .await
        .map_err(|e| {
            tracing::error!("Password update error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;

    tracing::info!(member_id = actor.id, "Password changed");
    Ok(Json(serde_json::json!({ "changed": true })))
}

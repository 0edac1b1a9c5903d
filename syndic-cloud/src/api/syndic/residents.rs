//! Resident administration handlers

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{Member, MemberStatus, NewResident};
use shared::util::{is_valid_email, now_millis};

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;

/// GET /api/syndic/residents
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<Member>> {
    let residents = db::residents::list_for_syndic(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Resident list query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(residents))
}

/// POST /api/syndic/residents
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(mut req): Json<NewResident>,
) -> ApiResult<serde_json::Value> {
    if req.full_name.trim().is_empty() {
        return Err(AppError::required_field("full_name"));
    }
    if req.email.trim().is_empty() {
        return Err(AppError::required_field("email"));
    }
    if req.unit_type.trim().is_empty() {
        return Err(AppError::required_field("unit_type"));
    }
    if req.residence_id <= 0 {
        return Err(AppError::validation("residence_id must be positive"));
    }
    if req.password.len() < 8 {
        return Err(AppError::new(ErrorCode::PasswordTooShort));
    }

    req.email = req.email.trim().to_lowercase();
    if !is_valid_email(&req.email) {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            "Invalid email address",
        ));
    }

    let member_id =
        db::residents::create_resident(&state.pool, actor.id, &req, now_millis()).await?;

    Ok(Json(serde_json::json!({ "member_id": member_id })))
}

#[derive(Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

/// PUT /api/syndic/residents/{id}/status
pub async fn set_status(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(resident_id): Path<i64>,
    Json(req): Json<StatusRequest>,
) -> ApiResult<serde_json::Value> {
    // Syndics may only toggle between active and inactive.
    let status = match MemberStatus::from_db(&req.status) {
        Some(s @ (MemberStatus::Active | MemberStatus::Inactive)) => s,
        _ => {
            return Err(AppError::validation("status must be active or inactive"));
        }
    };

    db::residents::set_status(&state.pool, actor.id, resident_id, status, now_millis()).await?;

    Ok(Json(serde_json::json!({
        "member_id": resident_id,
        "status": status.as_db(),
    })))
}

/// DELETE /api/syndic/residents/{id}
pub async fn remove(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(resident_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    db::residents::delete_resident(&state.pool, actor.id, resident_id).await?;

    Ok(Json(serde_json::json!({ "deleted": resident_id })))
}

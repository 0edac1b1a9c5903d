//! Syndic provisioning, listing, deletion, and purchase lifecycle

use axum::extract::{Path, State};
use axum::{Extension, Json};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::{NewSyndic, ProvisionedSyndic, PurchaseAction, SyndicSummary};
use shared::util::{is_valid_email, now_millis};

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;
use crate::util::DEFAULT_SYNDIC_PASSWORD;

/// POST /api/admin/syndics
pub async fn provision(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(mut req): Json<NewSyndic>,
) -> ApiResult<ProvisionedSyndic> {
    if req.full_name.trim().is_empty() {
        return Err(AppError::required_field("full_name"));
    }
    if req.email.trim().is_empty() {
        return Err(AppError::required_field("email"));
    }
    if req.phone.trim().is_empty() {
        return Err(AppError::required_field("phone"));
    }
    if req.city_name.trim().is_empty() {
        return Err(AppError::required_field("city_name"));
    }
    if req.residence_name.trim().is_empty() {
        return Err(AppError::required_field("residence_name"));
    }
    if req.subscription_id <= 0 {
        return Err(AppError::validation("subscription_id must be positive"));
    }

    req.email = req.email.trim().to_lowercase();
    if !is_valid_email(&req.email) {
        return Err(AppError::with_message(
            ErrorCode::InvalidFormat,
            "Invalid email address",
        ));
    }

    let member_id =
        db::provisioning::provision_syndic(&state.pool, actor.id, &req, now_millis()).await?;

    Ok(Json(ProvisionedSyndic {
        member_id,
        default_password: DEFAULT_SYNDIC_PASSWORD.to_string(),
    }))
}

/// GET /api/admin/syndics
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<SyndicSummary>> {
    let syndics = db::provisioning::list_for_admin(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Syndic list query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(syndics))
}

/// DELETE /api/admin/syndics/{id}
pub async fn remove(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(member_id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    ensure_managed(&state, actor.id, member_id).await?;

    db::provisioning::delete_syndic(&state.pool, member_id).await?;

    Ok(Json(serde_json::json!({ "deleted": member_id })))
}

#[derive(Deserialize)]
pub struct PurchaseRequest {
    pub action: PurchaseAction,
}

/// POST /api/admin/syndics/{id}/purchase
pub async fn purchase(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(member_id): Path<i64>,
    Json(req): Json<PurchaseRequest>,
) -> ApiResult<serde_json::Value> {
    ensure_managed(&state, actor.id, member_id).await?;

    db::provisioning::transition_purchase(&state.pool, member_id, req.action, now_millis())
        .await?;

    Ok(Json(serde_json::json!({
        "member_id": member_id,
        "action": req.action,
    })))
}

/// A syndic outside this admin's management links is reported as not found,
/// never as a permission problem.
async fn ensure_managed(state: &AppState, admin_id: i64, member_id: i64) -> Result<(), AppError> {
    let managed = db::provisioning::admin_manages(&state.pool, admin_id, member_id)
        .await
        .map_err(|e| {
            tracing::error!("Management link query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    if !managed {
        return Err(AppError::new(ErrorCode::MemberNotFound));
    }
    Ok(())
}

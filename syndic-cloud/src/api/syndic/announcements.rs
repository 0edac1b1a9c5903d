//! Announcement posting and listing (syndic side)

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::Announcement;
use shared::util::now_millis;

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AnnouncementRequest {
    pub residence_id: i64,
    pub title: String,
    pub body: String,
}

/// POST /api/syndic/announcements
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<AnnouncementRequest>,
) -> ApiResult<serde_json::Value> {
    if req.title.trim().is_empty() {
        return Err(AppError::required_field("title"));
    }
    if req.body.trim().is_empty() {
        return Err(AppError::required_field("body"));
    }

    let owns = db::tenancy::owns_residence(&state.pool, actor.id, req.residence_id)
        .await
        .map_err(|e| {
            tracing::error!("Residence ownership query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    if !owns {
        return Err(AppError::new(ErrorCode::ResidenceAccessDenied));
    }

    let id = db::announcements::insert(
        &state.pool,
        actor.id,
        req.residence_id,
        req.title.trim(),
        req.body.trim(),
        now_millis(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Announcement insert error: {e}");
        AppError::new(ErrorCode::DatabaseError)
    })?;

    tracing::info!(announcement_id = id, residence_id = req.residence_id, "Announcement posted");
    Ok(Json(serde_json::json!({ "id": id })))
}

/// GET /api/syndic/announcements
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<Announcement>> {
    let announcements = db::announcements::by_author(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Announcement list query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(announcements))
}

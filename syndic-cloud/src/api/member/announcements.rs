//! Announcements visible to a member (resident side)

use axum::extract::State;
use axum::{Extension, Json};
use shared::error::{AppError, ErrorCode};
use shared::models::Announcement;

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;

/// GET /api/member/announcements
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<Announcement>> {
    let announcements = db::announcements::for_member(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Announcement query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(announcements))
}

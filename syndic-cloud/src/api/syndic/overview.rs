//! Syndic dashboard counters

use axum::extract::State;
use axum::{Extension, Json};
use shared::error::{AppError, ErrorCode};
use shared::models::SyndicOverview;

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;

/// GET /api/syndic/overview
pub async fn overview(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<SyndicOverview> {
    let report = db::reports::syndic_overview(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Syndic overview error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(report))
}

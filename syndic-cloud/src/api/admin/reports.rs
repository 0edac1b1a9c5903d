//! Platform reports for the admin dashboard

use axum::extract::State;
use axum::{Extension, Json};
use shared::error::{AppError, ErrorCode};
use shared::models::{AdminOverview, RevenueMonth};

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;

/// GET /api/admin/reports/overview
pub async fn overview(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<AdminOverview> {
    let report = db::reports::admin_overview(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Overview report error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(report))
}

/// GET /api/admin/reports/revenue
pub async fn revenue(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<RevenueMonth>> {
    let months = db::reports::revenue_by_month(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Revenue report error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(months))
}

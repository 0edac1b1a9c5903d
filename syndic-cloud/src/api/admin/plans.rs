//! Subscription plan catalog CRUD

use axum::extract::{Path, State};
use axum::Json;
use shared::error::{AppError, ErrorCode};
use shared::models::{Plan, PlanCreate, PlanUpdate};
use shared::util::now_millis;

use crate::api::ApiResult;
use crate::db;
use crate::state::AppState;

/// GET /api/admin/plans
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Plan>> {
    let plans = db::plans::list(&state.pool).await.map_err(|e| {
        tracing::error!("Plan list query error: {e}");
        AppError::new(ErrorCode::DatabaseError)
    })?;
    Ok(Json(plans))
}

/// POST /api/admin/plans
pub async fn create(
    State(state): State<AppState>,
    Json(req): Json<PlanCreate>,
) -> ApiResult<Plan> {
    if req.name.trim().is_empty() {
        return Err(AppError::required_field("name"));
    }
    if req.price_cents <= 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "price_cents must be positive",
        ));
    }
    if req.duration_months <= 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "duration_months must be positive",
        ));
    }
    if req.max_residents <= 0 || req.max_apartments <= 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "plan caps must be positive",
        ));
    }

    let id = db::plans::create(&state.pool, &req, now_millis())
        .await
        .map_err(|e| {
            tracing::error!("Plan create error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;

    let plan = db::plans::find_by_id(&state.pool, id)
        .await
        .map_err(|e| {
            tracing::error!("Plan fetch error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?
        .ok_or_else(|| AppError::new(ErrorCode::PlanNotFound))?;

    tracing::info!(plan_id = id, name = %plan.name, "Plan created");
    Ok(Json(plan))
}

/// PUT /api/admin/plans/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<PlanUpdate>,
) -> ApiResult<Plan> {
    if req.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        return Err(AppError::required_field("name"));
    }
    if req.price_cents.is_some_and(|v| v <= 0)
        || req.duration_months.is_some_and(|v| v <= 0)
        || req.max_residents.is_some_and(|v| v <= 0)
        || req.max_apartments.is_some_and(|v| v <= 0)
    {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "plan fields must be positive",
        ));
    }

    let updated = db::plans::update(&state.pool, id, &req).await.map_err(|e| {
        tracing::error!("Plan update error: {e}");
        AppError::new(ErrorCode::DatabaseError)
    })?;
    if !updated {
        return Err(AppError::new(ErrorCode::PlanNotFound));
    }

    let plan = db::plans::find_by_id(&state.pool, id)
        .await
        .map_err(|e| {
            tracing::error!("Plan fetch error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?
        .ok_or_else(|| AppError::new(ErrorCode::PlanNotFound))?;

    Ok(Json(plan))
}

/// DELETE /api/admin/plans/{id}
///
/// Rejected while purchase records reference the plan; the error message
/// carries the live count.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<serde_json::Value> {
    let count = db::plans::purchase_count(&state.pool, id)
        .await
        .map_err(|e| {
            tracing::error!("Plan reference count error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    if count > 0 {
        return Err(AppError::with_message(
            ErrorCode::PlanInUse,
            format!("Cannot delete plan: {count} subscription(s) reference it"),
        ));
    }

    let deleted = db::plans::delete(&state.pool, id).await.map_err(|e| {
        tracing::error!("Plan delete error: {e}");
        AppError::new(ErrorCode::DatabaseError)
    })?;
    if !deleted {
        return Err(AppError::new(ErrorCode::PlanNotFound));
    }

    tracing::info!(plan_id = id, "Plan deleted");
    Ok(Json(serde_json::json!({ "deleted": id })))
}

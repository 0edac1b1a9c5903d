//! Resident fee payment recording (syndic side)

use axum::extract::State;
use axum::{Extension, Json};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::Payment;
use shared::util::now_millis;

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct PaymentRequest {
    pub member_id: i64,
    pub amount_cents: i64,
    pub label: String,
    pub paid_at: i64,
}

/// POST /api/syndic/payments
pub async fn create(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<PaymentRequest>,
) -> ApiResult<serde_json::Value> {
    if req.label.trim().is_empty() {
        return Err(AppError::required_field("label"));
    }
    if req.amount_cents <= 0 {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            "amount_cents must be positive",
        ));
    }

    let managed = db::residents::syndic_manages_resident(&state.pool, actor.id, req.member_id)
        .await
        .map_err(|e| {
            tracing::error!("Resident scope query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    if !managed {
        return Err(AppError::new(ErrorCode::MemberNotFound));
    }

    let id = db::payments::insert(
        &state.pool,
        req.member_id,
        actor.id,
        req.amount_cents,
        req.label.trim(),
        req.paid_at,
        now_millis(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Payment insert error: {e}");
        AppError::new(ErrorCode::DatabaseError)
    })?;

    tracing::info!(payment_id = id, member_id = req.member_id, "Payment recorded");
    Ok(Json(serde_json::json!({ "id": id })))
}

/// GET /api/syndic/payments
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<Payment>> {
    let payments = db::payments::by_recorder(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Payment list query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(payments))
}

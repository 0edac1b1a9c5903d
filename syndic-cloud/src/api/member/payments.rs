//! A member's own payment history

use axum::extract::State;
use axum::{Extension, Json};
use shared::error::{AppError, ErrorCode};
use shared::models::Payment;

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;

/// GET /api/member/payments
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<Payment>> {
    let payments = db::payments::by_member(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Payment history query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(payments))
}

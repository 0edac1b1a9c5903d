//! Residences owned by the syndic

use axum::extract::State;
use axum::{Extension, Json};
use shared::error::{AppError, ErrorCode};
use shared::models::ResidenceSummary;

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;

/// GET /api/syndic/residences
pub async fn list(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<ResidenceSummary>> {
    let residences = db::tenancy::residences_for_syndic(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Residence list query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(residences))
}

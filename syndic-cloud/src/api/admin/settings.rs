//! Site settings key-value endpoints

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use shared::error::{AppError, ErrorCode};
use shared::util::now_millis;

use crate::api::ApiResult;
use crate::db;
use crate::db::settings::SettingRow;
use crate::state::AppState;

/// GET /api/admin/settings
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<SettingRow>> {
    let rows = db::settings::all(&state.pool).await.map_err(|e| {
        tracing::error!("Settings query error: {e}");
        AppError::new(ErrorCode::DatabaseError)
    })?;
    Ok(Json(rows))
}

/// PUT /api/admin/settings
///
/// Body is a flat JSON object; every entry is upserted.
pub async fn update(
    State(state): State<AppState>,
    Json(entries): Json<BTreeMap<String, String>>,
) -> ApiResult<serde_json::Value> {
    if entries.is_empty() {
        return Err(AppError::validation("No settings provided"));
    }

    let now = now_millis();
    for (key, value) in &entries {
        if key.trim().is_empty() {
            return Err(AppError::required_field("key"));
        }
        db::settings::upsert(&state.pool, key, value, now)
            .await
            .map_err(|e| {
                tracing::error!("Settings upsert error: {e}");
                AppError::new(ErrorCode::DatabaseError)
            })?;
    }

    Ok(Json(serde_json::json!({ "updated": entries.len() })))
}

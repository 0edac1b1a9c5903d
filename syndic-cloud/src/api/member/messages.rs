//! Direct messaging endpoints

use axum::extract::{Query, State};
use axum::{Extension, Json};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};
use shared::models::Message;
use shared::util::now_millis;

use crate::api::ApiResult;
use crate::auth::Actor;
use crate::db;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SendRequest {
    pub receiver_id: i64,
    pub body: String,
}

/// POST /api/member/messages
pub async fn send(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(req): Json<SendRequest>,
) -> ApiResult<serde_json::Value> {
    if req.body.trim().is_empty() {
        return Err(AppError::required_field("body"));
    }

    let receiver = db::members::find_by_id(&state.pool, req.receiver_id)
        .await
        .map_err(|e| {
            tracing::error!("Receiver query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    if receiver.is_none() {
        return Err(AppError::new(ErrorCode::ReceiverNotFound));
    }

    let id = db::messages::insert(
        &state.pool,
        actor.id,
        req.receiver_id,
        req.body.trim(),
        now_millis(),
    )
    .await
    .map_err(|e| {
        tracing::error!("Message insert error: {e}");
        AppError::new(ErrorCode::DatabaseError)
    })?;

    Ok(Json(serde_json::json!({ "id": id })))
}

#[derive(Deserialize)]
pub struct ConversationQuery {
    /// The other party's member id
    pub with: i64,
}

/// GET /api/member/messages?with={id}
///
/// Fetching marks messages addressed to the caller as read.
pub async fn conversation(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<ConversationQuery>,
) -> ApiResult<Vec<Message>> {
    let messages = db::messages::conversation(&state.pool, actor.id, query.with, now_millis())
        .await
        .map_err(|e| {
            tracing::error!("Conversation query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(messages))
}

/// GET /api/member/inbox
pub async fn inbox(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> ApiResult<Vec<Message>> {
    let messages = db::messages::inbox(&state.pool, actor.id)
        .await
        .map_err(|e| {
            tracing::error!("Inbox query error: {e}");
            AppError::new(ErrorCode::DatabaseError)
        })?;
    Ok(Json(messages))
}

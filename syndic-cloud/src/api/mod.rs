//! API routes for syndic-cloud

pub mod admin;
pub mod auth;
pub mod health;
pub mod member;
pub mod register;
pub mod syndic;


use axum::routing::{get, post};
use axum::{Router, middleware};
use tower_http::trace::TraceLayer;

use crate::auth::actor_auth::actor_auth_middleware;
use crate::state::AppState;

use shared::error::AppError;

pub type ApiResult<T> = Result<axum::Json<T>, AppError>;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    // Public: health, login, resident self-registration (no auth)
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/auth/login", post(auth::login))
        .route("/api/register", post(register::register));

    // Authenticated surfaces, each behind its role guard
    let authed = Router::new()
        .nest("/api/admin", admin::routes())
        .nest("/api/syndic", syndic::routes())
        .nest("/api/member", member::routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            actor_auth_middleware,
        ));

    Router::new()
        .merge(public)
        .merge(authed)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

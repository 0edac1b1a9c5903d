//! Admin surface: syndic provisioning/billing, plan catalog, reports, settings

mod plans;
mod reports;
mod settings;
mod syndics;

use axum::routing::{delete, get, post, put};
use axum::{Router, middleware};

use crate::auth::actor_auth::require_admin;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/syndics", post(syndics::provision).get(syndics::list))
        .route("/syndics/{id}", delete(syndics::remove))
        .route("/syndics/{id}/purchase", post(syndics::purchase))
        .route("/plans", get(plans::list).post(plans::create))
        .route("/plans/{id}", put(plans::update).delete(plans::remove))
        .route("/reports/overview", get(reports::overview))
        .route("/reports/revenue", get(reports::revenue))
        .route("/settings", get(settings::list).put(settings::update))
        .layer(middleware::from_fn(require_admin))
}

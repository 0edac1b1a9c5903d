//! Syndic surface: residences, resident administration, announcements,
//! fee payments, dashboard

mod announcements;
mod overview;
mod payments;
mod residences;
mod residents;

use axum::routing::{delete, get, post, put};
use axum::{Router, middleware};

use crate::auth::actor_auth::require_syndic;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/residences", get(residences::list))
        .route("/residents", get(residents::list).post(residents::create))
        .route("/residents/{id}/status", put(residents::set_status))
        .route("/residents/{id}", delete(residents::remove))
        .route(
            "/announcements",
            post(announcements::create).get(announcements::list),
        )
        .route("/payments", post(payments::create).get(payments::list))
        .route("/overview", get(overview::overview))
        .layer(middleware::from_fn(require_syndic))
}

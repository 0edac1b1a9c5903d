//! Member surface: profile, messaging, announcements, payment history
//!
//! Open to both syndics and residents; handlers scope everything by the
//! caller's id.

mod account;
mod announcements;
mod messages;
mod payments;

use axum::routing::{get, post};
use axum::{Router, middleware};

use crate::auth::actor_auth::require_member;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile",
            get(account::get_profile).put(account::update_profile),
        )
        .route("/change-password", post(account::change_password))
        .route("/messages", post(messages::send).get(messages::conversation))
        .route("/inbox", get(messages::inbox))
        .route("/announcements", get(announcements::list))
        .route("/payments", get(payments::list))
        .layer(middleware::from_fn(require_member))
}

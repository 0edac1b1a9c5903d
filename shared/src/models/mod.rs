//! Data models
//!
//! Shared between syndic-cloud and frontends (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod admin;
pub mod billing;
pub mod member;
pub mod message;
pub mod payment;
pub mod plan;
pub mod report;
pub mod residence;

// Re-exports
pub use admin::*;
pub use billing::*;
pub use member::*;
pub use message::*;
pub use payment::*;
pub use plan::*;
pub use report::*;
pub use residence::*;
